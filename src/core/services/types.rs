use serde_json::Value;
use std::fmt;

/// Positional bind parameter for a statement
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Int(i32),
    NullableInt(Option<i32>),
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        SqlParam::Text(value.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        SqlParam::Text(value)
    }
}

impl From<i32> for SqlParam {
    fn from(value: i32) -> Self {
        SqlParam::Int(value)
    }
}

impl From<Option<i32>> for SqlParam {
    fn from(value: Option<i32>) -> Self {
        SqlParam::NullableInt(value)
    }
}

/// Rows of one query, column names kept in select order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl ResultSet {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Value at `row` for the named column
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }
}

/// Selectable option: what the user sees and the id that gets written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub id: i32,
}

impl Choice {
    pub fn new(label: impl Into<String>, id: i32) -> Self {
        Self {
            label: label.into(),
            id,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_set_lookup() {
        let result = ResultSet::new(
            vec!["id".to_string(), "name".to_string()],
            vec![vec![json!(1), json!("Engineering")], vec![json!(2), json!("Sales")]],
        );
        assert_eq!(result.len(), 2);
        assert_eq!(result.column_index("name"), Some(1));
        assert_eq!(result.value(1, "name"), Some(&json!("Sales")));
        assert_eq!(result.value(0, "missing"), None);
        assert_eq!(result.value(5, "id"), None);
    }

    #[test]
    fn test_sql_param_conversions() {
        assert_eq!(SqlParam::from("Ada"), SqlParam::Text("Ada".to_string()));
        assert_eq!(SqlParam::from(7), SqlParam::Int(7));
        assert_eq!(SqlParam::from(None), SqlParam::NullableInt(None));
    }

    #[test]
    fn test_choice_displays_label() {
        assert_eq!(Choice::new("Ada Lovelace", 3).to_string(), "Ada Lovelace");
    }
}
