//! Environment variable readers
//!
//! Lookups go through a caller-supplied function so configuration resolution can be
//! tested without touching the process environment.

use crate::error::ConfigError;
use std::str::FromStr;

/// Environment variable configuration reader
pub struct EnvConfigReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    lookup: F,
}

impl EnvConfigReader<fn(&str) -> Option<String>> {
    /// Reader backed by the process environment
    pub fn from_process() -> Self {
        Self {
            lookup: |key| std::env::var(key).ok(),
        }
    }
}

impl<F> EnvConfigReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub fn new(lookup: F) -> Self {
        Self { lookup }
    }

    /// Read a variable, treating empty values as unset
    pub fn read_string(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|value| !value.trim().is_empty())
    }

    /// Read and parse a variable
    pub fn read_parsed<T: FromStr>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        match self.read_string(key) {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse::<T>()
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    field: key.to_string(),
                    value: raw.clone(),
                    reason: format!("{} must be a number", key),
                }),
        }
    }

    /// Read NO_COLOR environment variable
    pub fn read_no_color(&self) -> bool {
        (self.lookup)("NO_COLOR").is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn reader(vars: &[(&str, &str)]) -> EnvConfigReader<impl Fn(&str) -> Option<String>> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvConfigReader::new(move |key| map.get(key).cloned())
    }

    #[test]
    fn test_read_string_ignores_empty() {
        let env = reader(&[("DB_HOST", ""), ("DB_USER", "admin")]);
        assert_eq!(env.read_string("DB_HOST"), None);
        assert_eq!(env.read_string("DB_USER"), Some("admin".to_string()));
        assert_eq!(env.read_string("DB_NAME"), None);
    }

    #[test]
    fn test_read_parsed_with_valid_value() {
        let env = reader(&[("DB_PORT", "6543")]);
        assert_eq!(env.read_parsed::<u16>("DB_PORT").expect("parse"), Some(6543));
    }

    #[test]
    fn test_read_parsed_with_invalid_value() {
        let env = reader(&[("DB_PORT", "invalid")]);
        let result = env.read_parsed::<u16>("DB_PORT");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "DB_PORT"
        ));
    }

    #[test]
    fn test_read_no_color() {
        assert!(reader(&[("NO_COLOR", "1")]).read_no_color());
        assert!(!reader(&[]).read_no_color());
    }
}
