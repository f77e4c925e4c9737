//! In-memory column-major table of JSON values.

use serde_json::{Map, Value};
use starframe_types::error::TableError;

use super::Table;

/// An in-memory table stored column by column.
///
/// Column names are unique: adding a column under an existing name replaces
/// its values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnTable {
    columns: Vec<(String, Vec<Value>)>,
}

impl ColumnTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ColumnTable::insert_column`].
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<Value>) -> Self {
        self.insert_column(name, values);
        self
    }

    /// Add a column, replacing any existing column with the same name.
    pub fn insert_column(&mut self, name: impl Into<String>, values: Vec<Value>) {
        let name = name.into();
        match self.columns.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing_values)) => *existing_values = values,
            None => self.columns.push((name, values)),
        }
    }

    /// Number of rows, taken from the longest column.
    pub fn num_rows(&self) -> usize {
        self.columns
            .iter()
            .map(|(_, values)| values.len())
            .max()
            .unwrap_or(0)
    }

    /// Build a table from either JSON layout.
    ///
    /// An object is read as `{ "column": [values..] }`; an array is read as
    /// a list of row objects.
    pub fn from_json(value: Value) -> Result<Self, TableError> {
        match value {
            Value::Object(_) => Self::from_columns_json(value),
            Value::Array(_) => Self::from_records_json(value),
            other => Err(TableError::Parse(format!(
                "expected a JSON object of columns or an array of rows, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Build a table from a column-major JSON object.
    pub fn from_columns_json(value: Value) -> Result<Self, TableError> {
        let Value::Object(object) = value else {
            return Err(TableError::Parse(
                "expected a JSON object of column arrays".to_string(),
            ));
        };

        let mut table = Self::new();
        for (name, column) in object {
            match column {
                Value::Array(values) => table.insert_column(name, values),
                other => {
                    return Err(TableError::Parse(format!(
                        "column '{name}' is not an array (got {})",
                        json_kind(&other)
                    )));
                }
            }
        }
        Ok(table)
    }

    /// Build a table from a row-major JSON array of objects.
    ///
    /// The column set is the union of row keys in first-seen order. A row
    /// missing a key gets `null` in that column so rows stay aligned.
    pub fn from_records_json(value: Value) -> Result<Self, TableError> {
        let Value::Array(rows) = value else {
            return Err(TableError::Parse(
                "expected a JSON array of row objects".to_string(),
            ));
        };

        let mut records: Vec<Map<String, Value>> = Vec::with_capacity(rows.len());
        let mut names: Vec<String> = Vec::new();
        for (index, row) in rows.into_iter().enumerate() {
            let Value::Object(record) = row else {
                return Err(TableError::Parse(format!("row {index} is not a JSON object")));
            };
            for key in record.keys() {
                if !names.contains(key) {
                    names.push(key.clone());
                }
            }
            records.push(record);
        }

        let mut table = Self::new();
        for name in names {
            let values = records
                .iter_mut()
                .map(|record| record.remove(&name).unwrap_or(Value::Null))
                .collect();
            table.insert_column(name, values);
        }
        Ok(table)
    }
}

impl Table for ColumnTable {
    fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }

    fn column(&self, name: &str) -> Result<Vec<Value>, TableError> {
        self.columns
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, values)| values.clone())
            .ok_or_else(|| TableError::ColumnNotFound(name.to_string()))
    }

    fn column_count(&self) -> usize {
        self.columns.len()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
