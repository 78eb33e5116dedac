use crate::error::{AppError, DatabaseError};

/// Helper functions for standardizing error conversions and reporting.
/// Wrap a driver error raised by a statement
pub fn convert_query_error(error: sqlx::Error, sql: &str) -> DatabaseError {
    DatabaseError::Query {
        sql: sql.to_string(),
        source: error,
    }
}

/// Wrap a driver error raised while opening the pool
pub fn convert_connect_error(error: sqlx::Error, target: &str) -> DatabaseError {
    DatabaseError::Connection {
        target: target.to_string(),
        source: error,
    }
}

/// Wrap a driver error raised while reading a column value
pub fn convert_decode_error(error: sqlx::Error, column: &str) -> DatabaseError {
    DatabaseError::Decode {
        column: column.to_string(),
        message: error.to_string(),
    }
}

/// Format an error for the terminal, with its hint on a second line
pub fn format_error_report(error: &AppError) -> String {
    let mut report = format!("{} {}", error.severity().emoji(), error.display_friendly());
    if let Some(hint) = error.troubleshooting_hint() {
        report.push_str(&format!("\n   💡 {}", hint));
    }
    report
}

pub fn report_error(error: &AppError) {
    eprintln!("{}", format_error_report(error));
}

/// Helper macro for standardizing statement error mapping
#[macro_export]
macro_rules! map_query_error {
    ($result:expr, $sql:expr) => {
        $result.map_err(|e| $crate::utils::error_helpers::convert_query_error(e, $sql))
    };
}
