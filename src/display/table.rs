use crate::core::services::types::ResultSet;
use crate::error::{AppError, DisplayError};
use crate::utils::input::EnvConfigReader;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};
use crossterm::terminal;

/// Formatter for query results
pub struct TableDisplay {
    max_width: Option<usize>,
    use_colors: bool,
}

impl TableDisplay {
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            use_colors: true,
        }
    }

    /// Honors NO_COLOR
    pub fn from_env() -> Self {
        Self::new().with_colors(!EnvConfigReader::from_process().read_no_color())
    }

    fn detect_terminal_width() -> Option<usize> {
        match terminal::size() {
            Ok((cols, _)) => Some((cols as usize).clamp(40, 200)),
            Err(_) => Some(80),
        }
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn bold_header(&self, text: &str, color: Color) -> Cell {
        if self.use_colors {
            Cell::new(text).add_attribute(Attribute::Bold).fg(color)
        } else {
            Cell::new(text).add_attribute(Attribute::Bold)
        }
    }

    fn configure_table_width(&self, table: &mut Table) {
        let width = self
            .max_width
            .map(|w| if w > 20 { w - 6 } else { w.max(40) })
            .unwrap_or(80);
        table.set_width(width as u16);
    }

    /// Render every row of a result set
    pub fn render_result_set(&self, result: &ResultSet) -> Result<String, AppError> {
        if result.is_empty() {
            return Ok("No rows found.".to_string());
        }

        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        self.configure_table_width(&mut table);

        let headers: Vec<Cell> = result
            .columns
            .iter()
            .map(|column| self.bold_header(column, Color::Green))
            .collect();
        table.set_header(headers);

        for (index, row) in result.rows.iter().enumerate() {
            if row.len() != result.columns.len() {
                return Err(DisplayError::TableFormat(format!(
                    "row {} has {} values for {} columns",
                    index,
                    row.len(),
                    result.columns.len()
                ))
                .into());
            }

            let cells: Vec<Cell> = row
                .iter()
                .map(|value| {
                    let formatted = self.format_cell_value(value);
                    if self.use_colors && value.is_null() {
                        Cell::new(formatted)
                            .fg(Color::DarkGrey)
                            .add_attribute(Attribute::Italic)
                    } else {
                        Cell::new(formatted)
                    }
                })
                .collect();
            table.add_row(cells);
        }

        let mut output = table.to_string();
        output.push_str(&format!(
            "\n{} row{}",
            result.len(),
            if result.len() == 1 { "" } else { "s" }
        ));
        Ok(output)
    }

    pub fn format_cell_value(&self, value: &serde_json::Value) -> String {
        match value {
            serde_json::Value::Null => "NULL".to_string(),
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Array(arr) if arr.is_empty() => "[]".to_string(),
            serde_json::Value::Array(arr) => format!("[{} items]", arr.len()),
            serde_json::Value::Object(obj) if obj.is_empty() => "{}".to_string(),
            serde_json::Value::Object(obj) => format!("{{{} items}}", obj.len()),
        }
    }
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}
