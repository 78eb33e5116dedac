use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("DatabaseError: {0}")]
    Database(#[from] DatabaseError),
    #[error("PromptError: {0}")]
    Prompt(#[from] PromptError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    Parse { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Could not connect to {target}: {source}")]
    Connection {
        target: String,
        source: sqlx::Error,
    },
    #[error("{source}")]
    Query { sql: String, source: sqlx::Error },
    #[error("Could not decode column '{column}': {message}")]
    Decode { column: String, message: String },
}

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Prompt cancelled")]
    Canceled,
    #[error("Prompt interrupted")]
    Interrupted,
    #[error("No {what} available")]
    NoChoices { what: String },
    #[error("Terminal error: {message}")]
    Terminal { message: String },
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Table formatting failed: {0}")]
    TableFormat(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Config(_) => ErrorSeverity::Critical,
            AppError::Database(db_error) => match db_error {
                DatabaseError::Connection { .. } => ErrorSeverity::Critical,
                DatabaseError::Query { .. } => ErrorSeverity::High,
                DatabaseError::Decode { .. } => ErrorSeverity::Medium,
            },
            AppError::Prompt(prompt_error) => match prompt_error {
                PromptError::Terminal { .. } => ErrorSeverity::Critical,
                PromptError::NoChoices { .. } => ErrorSeverity::Medium,
                PromptError::Canceled | PromptError::Interrupted => ErrorSeverity::Low,
            },
            AppError::Display(_) => ErrorSeverity::Low,
        }
    }

    /// Whether the menu loop has to stop after this error.
    pub fn is_fatal(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Prompt(PromptError::Canceled | PromptError::Interrupted) => {
                "Cancelled.".to_string()
            }
            AppError::Prompt(PromptError::NoChoices { what }) => {
                format!("No {} available. Add one first.", what)
            }
            AppError::Database(DatabaseError::Connection { target, .. }) => {
                format!("Could not connect to the database at {}", target)
            }
            _ => format!("{}", self),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Database(DatabaseError::Connection { .. }) => Some(
                "Check DB_HOST, DB_PORT, DB_USER, DB_PASSWORD and DB_NAME (or config.toml)"
                    .to_string(),
            ),
            AppError::Config(ConfigError::InvalidValue { reason, .. }) => Some(reason.clone()),
            AppError::Prompt(PromptError::Terminal { .. }) => {
                Some("roster-cli needs an interactive terminal".to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let config_err = ConfigError::InvalidValue {
            field: "DB_PORT".to_string(),
            value: "abc".to_string(),
            reason: "must be a port number".to_string(),
        };
        assert_eq!(
            format!("{}", config_err),
            "Invalid configuration value for 'DB_PORT': abc"
        );

        let config_err = ConfigError::Parse {
            message: "bad toml".to_string(),
        };
        assert_eq!(
            format!("{}", config_err),
            "Configuration parse error: bad toml"
        );
    }

    #[test]
    fn test_database_error_display() {
        let db_err = DatabaseError::Query {
            sql: "SELECT 1".to_string(),
            source: sqlx::Error::RowNotFound,
        };
        assert_eq!(format!("{}", db_err), sqlx::Error::RowNotFound.to_string());

        let db_err = DatabaseError::Decode {
            column: "salary".to_string(),
            message: "mismatched types".to_string(),
        };
        assert_eq!(
            format!("{}", db_err),
            "Could not decode column 'salary': mismatched types"
        );
    }

    #[test]
    fn test_prompt_error_display() {
        let prompt_err = PromptError::NoChoices {
            what: "departments".to_string(),
        };
        assert_eq!(format!("{}", prompt_err), "No departments available");
        assert_eq!(format!("{}", PromptError::Canceled), "Prompt cancelled");
    }

    #[test]
    fn test_severity_and_fatality() {
        let connection = AppError::Database(DatabaseError::Connection {
            target: "postgres@localhost:5432/postgres".to_string(),
            source: sqlx::Error::PoolTimedOut,
        });
        assert_eq!(connection.severity(), ErrorSeverity::Critical);
        assert!(connection.is_fatal());
        assert!(connection.troubleshooting_hint().is_some());

        let query = AppError::Database(DatabaseError::Query {
            sql: "INSERT INTO department (name) VALUES ($1)".to_string(),
            source: sqlx::Error::RowNotFound,
        });
        assert_eq!(query.severity(), ErrorSeverity::High);
        assert!(!query.is_fatal());

        let canceled = AppError::Prompt(PromptError::Canceled);
        assert_eq!(canceled.severity(), ErrorSeverity::Low);
        assert!(!canceled.is_fatal());
        assert_eq!(canceled.display_friendly(), "Cancelled.");

        let terminal = AppError::Prompt(PromptError::Terminal {
            message: "not a tty".to_string(),
        });
        assert!(terminal.is_fatal());
    }

    #[test]
    fn test_no_choices_friendly_message() {
        let app_err = AppError::Prompt(PromptError::NoChoices {
            what: "roles".to_string(),
        });
        assert_eq!(app_err.display_friendly(), "No roles available. Add one first.");
        assert_eq!(app_err.troubleshooting_hint(), None);
    }
}
