use tracing_subscriber::EnvFilter;

/// Install the log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` turns on debug output for this crate.
/// Records emitted through the `log` facade are forwarded to the same subscriber.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("warn,roster_cli=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    // A second init (tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn print_verbose(verbose: bool, msg: &str) {
    if verbose {
        println!("Verbose: {}", msg);
    }
}

pub fn log_error(msg: &str) {
    eprintln!("❌ {}", msg);
}

pub fn log_warning(msg: &str) {
    eprintln!("⚠️  {}", msg);
}

pub fn log_info(msg: &str) {
    println!("{}", msg);
}

pub fn log_success(msg: &str) {
    println!("✅ {}", msg);
}
