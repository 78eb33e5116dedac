//! Utils module - Shared utilities and helpers
//!
//! This module provides utility functions and helpers that are used across
//! multiple layers of the application architecture.

/// Error conversion and reporting helpers
pub mod error_helpers;

/// Environment variable readers
pub mod input;

/// Console output and log subscriber setup
pub mod logging;
