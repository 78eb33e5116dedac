use crate::core::services::traits::Gateway;
use crate::core::services::types::{Choice, ResultSet};
use crate::utils::logging::log_error;
use serde_json::Value;

/// Turns lookup queries into selectable (label, id) options.
pub struct ChoiceService<'a> {
    gateway: &'a dyn Gateway,
}

impl<'a> ChoiceService<'a> {
    pub fn new(gateway: &'a dyn Gateway) -> Self {
        Self { gateway }
    }

    /// Run `query` and pair each row's `label_field` with its `id`.
    ///
    /// A failing query yields no options; the error is reported, not returned.
    pub async fn load(&self, query: &str, label_field: &str) -> Vec<Choice> {
        match self.gateway.query(query, &[]).await {
            Ok(result) => choices_from_rows(&result, label_field),
            Err(e) => {
                log::debug!("choice lookup failed: {}: {:?}", query, e);
                log_error(&format!("Error fetching choices: {}", e));
                Vec::new()
            }
        }
    }

    /// Convenience for the `(query, label)` pairs in [`crate::core::queries`]
    pub async fn load_lookup(&self, lookup: (&str, &str)) -> Vec<Choice> {
        self.load(lookup.0, lookup.1).await
    }
}

pub fn choices_from_rows(result: &ResultSet, label_field: &str) -> Vec<Choice> {
    (0..result.len())
        .filter_map(|row| {
            let id = result
                .value(row, "id")
                .and_then(Value::as_i64)
                .and_then(|id| i32::try_from(id).ok());
            let Some(id) = id else {
                log::debug!("skipping lookup row {} without an integer id", row);
                return None;
            };
            let label = match result.value(row, label_field) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Null) | None => "(unnamed)".to_string(),
                Some(other) => other.to_string(),
            };
            Some(Choice::new(label, id))
        })
        .collect()
}
