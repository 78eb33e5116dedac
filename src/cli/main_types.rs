use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "roster-cli")]
#[command(about = "Interactive menu for managing departments, roles and employees")]
#[command(version)]
#[command(after_help = "Environment Variables:
  DB_USER             Database user (default: postgres)
  DB_HOST             Database host (default: localhost)
  DB_NAME             Database name (default: postgres)
  DB_PASSWORD         Database password
  DB_PORT             Database port (default: 5432)
  DB_MAX_CONNECTIONS  Pool size (default: 1)
  DB_CONNECT_TIMEOUT  Seconds to wait for the first connection (default: 5)

A .env file in the working directory is read before these are resolved.")]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,

    /// Custom configuration directory path (containing config.toml)
    #[arg(long)]
    pub config_dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from(["roster-cli", "--verbose", "--config-dir", "/tmp/roster"]);
        assert!(cli.verbose);
        assert_eq!(cli.config_dir.as_deref(), Some("/tmp/roster"));

        let cli = Cli::parse_from(["roster-cli"]);
        assert!(!cli.verbose);
        assert!(cli.config_dir.is_none());
    }

    #[test]
    fn test_cli_rejects_subcommands() {
        assert!(Cli::try_parse_from(["roster-cli", "view"]).is_err());
    }
}
