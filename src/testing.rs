//! In-memory gateway used by unit tests.

use crate::core::services::traits::Gateway;
use crate::core::services::types::{ResultSet, SqlParam};
use crate::error::DatabaseError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub(crate) type Statement = (String, Vec<SqlParam>);

#[derive(Default)]
struct Inner {
    // (sql fragment, rows) pairs; the first fragment contained in the sql wins
    rows: Vec<(String, ResultSet)>,
    failures: Vec<String>,
    queries: Mutex<Vec<Statement>>,
    executed: Mutex<Vec<Statement>>,
    closed: AtomicBool,
}

/// Records every statement and answers from canned results.
#[derive(Clone, Default)]
pub(crate) struct RecordingGateway {
    inner: Arc<Inner>,
}

impl RecordingGateway {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn inner_mut(&mut self) -> &mut Inner {
        Arc::get_mut(&mut self.inner).expect("configure before cloning")
    }

    pub(crate) fn with_rows(mut self, fragment: &str, rows: ResultSet) -> Self {
        self.inner_mut().rows.push((fragment.to_string(), rows));
        self
    }

    pub(crate) fn failing_on(mut self, fragment: &str) -> Self {
        self.inner_mut().failures.push(fragment.to_string());
        self
    }

    pub(crate) fn queries(&self) -> Vec<Statement> {
        self.inner.queries.lock().expect("lock").clone()
    }

    pub(crate) fn executed(&self) -> Vec<Statement> {
        self.inner.executed.lock().expect("lock").clone()
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }

    fn check_failure(&self, sql: &str) -> Result<(), DatabaseError> {
        if self.inner.failures.iter().any(|f| sql.contains(f.as_str())) {
            return Err(DatabaseError::Query {
                sql: sql.to_string(),
                source: sqlx::Error::Protocol("simulated failure".to_string()),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Gateway for RecordingGateway {
    async fn query(&self, sql: &str, params: &[SqlParam]) -> Result<ResultSet, DatabaseError> {
        self.inner
            .queries
            .lock()
            .expect("lock")
            .push((sql.to_string(), params.to_vec()));
        self.check_failure(sql)?;
        Ok(self
            .inner
            .rows
            .iter()
            .find(|(fragment, _)| sql.contains(fragment.as_str()))
            .map(|(_, rows)| rows.clone())
            .unwrap_or_default())
    }

    async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<u64, DatabaseError> {
        self.inner
            .executed
            .lock()
            .expect("lock")
            .push((sql.to_string(), params.to_vec()));
        self.check_failure(sql)?;
        Ok(1)
    }

    async fn close(&self) {
        self.inner.closed.store(true, Ordering::SeqCst);
    }
}
