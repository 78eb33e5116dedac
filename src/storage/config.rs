//! Database configuration
//!
//! Priority: environment variables (including a `.env` file) > config.toml > development
//! defaults.

use crate::error::ConfigError;
use crate::utils::input::EnvConfigReader;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

type Result<T> = std::result::Result<T, ConfigError>;

pub const DEFAULT_USER: &str = "postgres";
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_DATABASE: &str = "postgres";
pub const DEFAULT_PASSWORD: &str = "1234";
pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 1;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// On-disk configuration file
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub database: DatabaseSection,
}

/// `[database]` table of config.toml; every field is optional
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DatabaseSection {
    pub user: Option<String>,
    pub host: Option<String>,
    pub database: Option<String>,
    pub password: Option<String>,
    pub port: Option<u16>,
    pub max_connections: Option<u32>,
    pub connect_timeout_secs: Option<u64>,
}

impl ConfigFile {
    /// Load configuration from file, falling back to an empty config when it is absent
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            return Ok(ConfigFile::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            message: format!("Failed to parse {}: {}", config_path.display(), e),
        })
    }

    fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(ConfigError::ConfigDirNotFound)?;
        Ok(home_dir
            .join(".config")
            .join("roster-cli")
            .join("config.toml"))
    }
}

/// Resolved connection settings, immutable after startup
#[derive(Clone, PartialEq)]
pub struct DbConfig {
    pub user: String,
    pub host: String,
    pub database: String,
    pub password: String,
    pub port: u16,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            host: DEFAULT_HOST.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            port: DEFAULT_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("user", &self.user)
            .field("host", &self.host)
            .field("database", &self.database)
            .field("password", &"*****")
            .field("port", &self.port)
            .field("max_connections", &self.max_connections)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl DbConfig {
    /// Load config.toml (from `config_dir` or the default location) and apply the
    /// process environment on top of it.
    pub fn load(config_dir: Option<PathBuf>) -> Result<Self> {
        let file = ConfigFile::load(config_dir.map(|dir| dir.join("config.toml")))?;
        Self::resolve(file.database, &EnvConfigReader::from_process())
    }

    /// Merge file values and environment values over the defaults
    pub fn resolve<F>(file: DatabaseSection, env: &EnvConfigReader<F>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DbConfig::default();

        let max_connections = env
            .read_parsed::<u32>("DB_MAX_CONNECTIONS")?
            .or(file.max_connections)
            .unwrap_or(defaults.max_connections);
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_connections".to_string(),
                value: "0".to_string(),
                reason: "max_connections must be at least 1".to_string(),
            });
        }

        let connect_timeout = env
            .read_parsed::<u64>("DB_CONNECT_TIMEOUT")?
            .or(file.connect_timeout_secs)
            .map(Duration::from_secs)
            .unwrap_or(defaults.connect_timeout);

        Ok(Self {
            user: env.read_string("DB_USER").or(file.user).unwrap_or(defaults.user),
            host: env.read_string("DB_HOST").or(file.host).unwrap_or(defaults.host),
            database: env
                .read_string("DB_NAME")
                .or(file.database)
                .unwrap_or(defaults.database),
            password: env
                .read_string("DB_PASSWORD")
                .or(file.password)
                .unwrap_or(defaults.password),
            port: env
                .read_parsed::<u16>("DB_PORT")?
                .or(file.port)
                .unwrap_or(defaults.port),
            max_connections,
            connect_timeout,
        })
    }

    /// Human-readable connection target, without the password
    pub fn target(&self) -> String {
        format!(
            "{}@{}:{}/{}",
            self.user, self.host, self.port, self.database
        )
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}
