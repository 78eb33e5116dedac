//! Storage layer for roster-cli
//!
//! Handles database configuration and the PostgreSQL gateway.

pub mod config;
pub mod database;
mod numeric;
