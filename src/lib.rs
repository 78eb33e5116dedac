//! # roster-cli
//!
//! Interactive menu for managing departments, roles and employees stored in PostgreSQL.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │           CLI Layer                 │  Menu loop, action handlers, prompts
//! ├─────────────────────────────────────┤
//! │          Core Layer                 │  Gateway trait, choice loader, queries
//! ├─────────────────────────────────────┤
//! │        Storage Layer                │  Configuration, PostgreSQL gateway
//! ├─────────────────────────────────────┤
//! │     Display / Utils Layer           │  Tables, logging, env helpers
//! └─────────────────────────────────────┘
//! ```

pub use error::AppError;

/// Main architecture layers (dependency flow: CLI → Core → Storage)
pub mod cli; // Menu loop and prompts
pub mod core; // Query contracts and services
pub mod storage; // Configuration and database access

/// Support modules (used across layers)
pub mod display; // Output formatting
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

#[cfg(test)]
pub(crate) mod testing;

pub type Result<T> = std::result::Result<T, AppError>;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::Result;
    pub use crate::cli::dispatcher::Dispatcher;
    pub use crate::cli::prompt::{InquirePrompter, Prompter};
    pub use crate::core::services::traits::Gateway;
    pub use crate::core::services::types::{Choice, ResultSet, SqlParam};
    pub use crate::error::AppError;
    pub use crate::storage::config::DbConfig;
    pub use crate::storage::database::PgGateway;
}
