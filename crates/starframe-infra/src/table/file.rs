//! Load a [`ColumnTable`] from a JSON or JSON Lines file.

use std::path::Path;

use serde_json::Value;

use starframe_core::table::{ColumnTable, Table};
use starframe_types::error::TableError;

/// Read a table file.
///
/// `.jsonl` / `.ndjson` files hold one row object per line. Any other file
/// is parsed as a single JSON document: either a `{ "column": [..] }` object
/// or an array of row objects.
pub async fn load_table_file(path: &Path) -> Result<ColumnTable, TableError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| TableError::Io(format!("{}: {e}", path.display())))?;

    let is_lines = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("jsonl" | "ndjson")
    );

    let parsed = if is_lines {
        parse_json_lines(&content)
    } else {
        serde_json::from_str::<Value>(&content).map_err(|e| e.to_string())
    };
    let value = parsed.map_err(|e| TableError::Parse(format!("{}: {e}", path.display())))?;

    let table = ColumnTable::from_json(value)?;
    tracing::debug!(
        path = %path.display(),
        columns = table.column_count(),
        rows = table.num_rows(),
        "Loaded table file"
    );
    Ok(table)
}

fn parse_json_lines(content: &str) -> Result<Value, String> {
    let mut rows = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row: Value =
            serde_json::from_str(line).map_err(|e| format!("line {}: {e}", line_no + 1))?;
        rows.push(row);
    }
    Ok(Value::Array(rows))
}
