use clap::Parser;
use roster_cli::AppError;
use roster_cli::cli::dispatcher::Dispatcher;
use roster_cli::cli::main_types::Cli;
use roster_cli::cli::prompt::InquirePrompter;
use roster_cli::storage::config::DbConfig;
use roster_cli::storage::database::PgGateway;
use roster_cli::utils::error_helpers::report_error;
use roster_cli::utils::logging::{init_logging, log_warning, print_verbose};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // .env values join the process environment before configuration is resolved
    let dotenv = dotenvy::dotenv();
    init_logging(cli.verbose);
    match &dotenv {
        Ok(path) => log::debug!("loaded environment from {}", path.display()),
        Err(e) if e.not_found() => log::debug!("no .env file found"),
        Err(e) => log_warning(&format!("Ignoring .env file: {}", e)),
    }

    let config = match DbConfig::load(cli.config_dir.as_ref().map(PathBuf::from)) {
        Ok(config) => config,
        Err(err) => {
            report_error(&AppError::from(err));
            std::process::exit(1);
        }
    };

    if cli.verbose {
        println!("Verbose mode is enabled");
        if let Some(config_dir) = &cli.config_dir {
            println!("Using config directory: {}", config_dir);
        }
    }
    print_verbose(cli.verbose, &format!("Connecting to {}", config.target()));

    let gateway = match PgGateway::connect(&config).await {
        Ok(gateway) => gateway,
        Err(err) => {
            report_error(&AppError::from(err));
            std::process::exit(1);
        }
    };
    println!("Connected to the database.");

    let dispatcher = Dispatcher::new(
        Box::new(gateway),
        Box::new(InquirePrompter::new()),
        cli.verbose,
    );

    if let Err(e) = dispatcher.run().await {
        report_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
