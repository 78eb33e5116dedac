use crate::core::services::types::{ResultSet, SqlParam};
use crate::error::DatabaseError;
use async_trait::async_trait;

/// Sole access point to the relational store.
///
/// Every call stands alone: no transaction spans two calls and nothing is retried.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Run a statement that returns rows
    async fn query(&self, sql: &str, params: &[SqlParam]) -> Result<ResultSet, DatabaseError>;

    /// Run a statement that modifies rows, returning the affected row count
    async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<u64, DatabaseError>;

    /// Release the underlying connection resources
    async fn close(&self);
}
