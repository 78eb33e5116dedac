//! PostgreSQL gateway
//!
//! Owns the `sqlx` pool and converts rows into [`ResultSet`]s so the rest of the crate
//! never sees driver types.

use crate::core::services::traits::Gateway;
use crate::core::services::types::{ResultSet, SqlParam};
use crate::error::DatabaseError;
use crate::map_query_error;
use crate::storage::config::DbConfig;
use crate::storage::numeric::numeric_to_string;
use crate::utils::error_helpers::{convert_connect_error, convert_decode_error};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::{PgArguments, PgPool, PgPoolOptions, PgRow};
use sqlx::query::Query;
use sqlx::{Column, Decode, Postgres, Row, TypeInfo, ValueRef};

pub struct PgGateway {
    pool: PgPool,
}

impl PgGateway {
    /// Open the pool and make sure one connection can be established.
    pub async fn connect(config: &DbConfig) -> Result<Self, DatabaseError> {
        log::debug!("connecting to {}", config.target());
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect_with(config.connect_options())
            .await
            .map_err(|e| convert_connect_error(e, &config.target()))?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn bind_params<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    params: &'q [SqlParam],
) -> Query<'q, Postgres, PgArguments> {
    for param in params {
        query = match param {
            SqlParam::Text(value) => query.bind(value.as_str()),
            SqlParam::Int(value) => query.bind(*value),
            SqlParam::NullableInt(value) => query.bind(*value),
        };
    }
    query
}

#[async_trait]
impl Gateway for PgGateway {
    async fn query(&self, sql: &str, params: &[SqlParam]) -> Result<ResultSet, DatabaseError> {
        log::debug!("query: {} {:?}", sql, params);
        let rows = map_query_error!(
            bind_params(sqlx::query(sql), params)
                .fetch_all(&self.pool)
                .await,
            sql
        )?;
        rows_to_result_set(&rows)
    }

    async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<u64, DatabaseError> {
        log::debug!("execute: {} {:?}", sql, params);
        let done = map_query_error!(
            bind_params(sqlx::query(sql), params)
                .execute(&self.pool)
                .await,
            sql
        )?;
        Ok(done.rows_affected())
    }

    async fn close(&self) {
        log::debug!("closing connection pool");
        self.pool.close().await;
    }
}

fn rows_to_result_set(rows: &[PgRow]) -> Result<ResultSet, DatabaseError> {
    let columns: Vec<String> = rows
        .first()
        .map(|row| {
            row.columns()
                .iter()
                .map(|column| column.name().to_string())
                .collect()
        })
        .unwrap_or_default();

    let mut values = Vec::with_capacity(rows.len());
    for row in rows {
        let mut cells = Vec::with_capacity(columns.len());
        for (index, name) in columns.iter().enumerate() {
            cells.push(decode_value(row, index, name)?);
        }
        values.push(cells);
    }

    Ok(ResultSet::new(columns, values))
}

fn decode_numeric(row: &PgRow, index: usize) -> Result<String, sqlx::Error> {
    let raw = row.try_get_raw(index)?;
    let bytes = <&[u8] as Decode<'_, Postgres>>::decode(raw).map_err(sqlx::Error::Decode)?;
    numeric_to_string(bytes).map_err(sqlx::Error::Decode)
}

/// Decode one column by its Postgres type into a JSON value
fn decode_value(row: &PgRow, index: usize, name: &str) -> Result<Value, DatabaseError> {
    let type_name = {
        let raw = row
            .try_get_raw(index)
            .map_err(|e| convert_decode_error(e, name))?;
        if raw.is_null() {
            return Ok(Value::Null);
        }
        raw.type_info().name().to_string()
    };

    let decode = |e| convert_decode_error(e, name);
    let value = match type_name.as_str() {
        "INT2" => Value::from(row.try_get::<i16, _>(index).map_err(decode)?),
        "INT4" => Value::from(row.try_get::<i32, _>(index).map_err(decode)?),
        "INT8" => Value::from(row.try_get::<i64, _>(index).map_err(decode)?),
        "FLOAT4" => Value::from(f64::from(row.try_get::<f32, _>(index).map_err(decode)?)),
        "FLOAT8" => Value::from(row.try_get::<f64, _>(index).map_err(decode)?),
        "NUMERIC" => Value::String(decode_numeric(row, index).map_err(decode)?),
        "BOOL" => Value::Bool(row.try_get::<bool, _>(index).map_err(decode)?),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => {
            Value::String(row.try_get::<String, _>(index).map_err(decode)?)
        }
        other => match row.try_get::<String, _>(index) {
            Ok(text) => Value::String(text),
            Err(_) => {
                log::debug!("column {} has unsupported type {}", name, other);
                Value::Null
            }
        },
    };
    Ok(value)
}
