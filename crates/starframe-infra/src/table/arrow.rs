//! Arrow `RecordBatch` adapter for the [`Table`] trait.
//!
//! Columns are materialized to JSON values one row at a time. Numeric,
//! boolean, string, list and struct arrays are supported; any other data
//! type fails with [`TableError::UnsupportedType`].

use arrow_array::cast::AsArray;
use arrow_array::types::{
    Float32Type, Float64Type, Int16Type, Int32Type, Int64Type, Int8Type, UInt16Type, UInt32Type,
    UInt64Type, UInt8Type,
};
use arrow_array::{Array, RecordBatch};
use arrow_schema::DataType;
use serde_json::{Map, Number, Value};

use starframe_core::table::Table;
use starframe_types::error::TableError;

/// A [`Table`] backed by an Arrow `RecordBatch`.
#[derive(Debug, Clone)]
pub struct ArrowTable {
    batch: RecordBatch,
}

impl ArrowTable {
    pub fn new(batch: RecordBatch) -> Self {
        Self { batch }
    }
}

impl From<RecordBatch> for ArrowTable {
    fn from(batch: RecordBatch) -> Self {
        Self::new(batch)
    }
}

impl Table for ArrowTable {
    fn column_names(&self) -> Vec<&str> {
        self.batch
            .schema_ref()
            .fields()
            .iter()
            .map(|field| field.name().as_str())
            .collect()
    }

    fn column(&self, name: &str) -> Result<Vec<Value>, TableError> {
        let array = self
            .batch
            .column_by_name(name)
            .ok_or_else(|| TableError::ColumnNotFound(name.to_string()))?;
        array_to_values(name, array.as_ref())
    }

    fn column_count(&self) -> usize {
        self.batch.num_columns()
    }
}

fn array_to_values(column: &str, array: &dyn Array) -> Result<Vec<Value>, TableError> {
    (0..array.len())
        .map(|index| value_at(column, array, index))
        .collect()
}

fn value_at(column: &str, array: &dyn Array, index: usize) -> Result<Value, TableError> {
    if array.is_null(index) {
        return Ok(Value::Null);
    }

    let value = match array.data_type() {
        DataType::Null => Value::Null,
        DataType::Boolean => Value::Bool(array.as_boolean().value(index)),
        DataType::Int8 => Value::from(array.as_primitive::<Int8Type>().value(index)),
        DataType::Int16 => Value::from(array.as_primitive::<Int16Type>().value(index)),
        DataType::Int32 => Value::from(array.as_primitive::<Int32Type>().value(index)),
        DataType::Int64 => Value::from(array.as_primitive::<Int64Type>().value(index)),
        DataType::UInt8 => Value::from(array.as_primitive::<UInt8Type>().value(index)),
        DataType::UInt16 => Value::from(array.as_primitive::<UInt16Type>().value(index)),
        DataType::UInt32 => Value::from(array.as_primitive::<UInt32Type>().value(index)),
        DataType::UInt64 => Value::from(array.as_primitive::<UInt64Type>().value(index)),
        DataType::Float32 => float(f64::from(array.as_primitive::<Float32Type>().value(index))),
        DataType::Float64 => float(array.as_primitive::<Float64Type>().value(index)),
        DataType::Utf8 => Value::String(array.as_string::<i32>().value(index).to_string()),
        DataType::LargeUtf8 => Value::String(array.as_string::<i64>().value(index).to_string()),
        DataType::List(_) => {
            let item = array.as_list::<i32>().value(index);
            Value::Array(array_to_values(column, item.as_ref())?)
        }
        DataType::LargeList(_) => {
            let item = array.as_list::<i64>().value(index);
            Value::Array(array_to_values(column, item.as_ref())?)
        }
        DataType::FixedSizeList(_, _) => {
            let item = array.as_fixed_size_list().value(index);
            Value::Array(array_to_values(column, item.as_ref())?)
        }
        DataType::Struct(fields) => {
            let children = array.as_struct().columns();
            let mut object = Map::with_capacity(fields.len());
            for (field, child) in fields.iter().zip(children) {
                object.insert(field.name().clone(), value_at(column, child.as_ref(), index)?);
            }
            Value::Object(object)
        }
        other => {
            return Err(TableError::UnsupportedType {
                column: column.to_string(),
                data_type: other.to_string(),
            });
        }
    };

    Ok(value)
}

/// Non-finite floats have no JSON form and become `null`.
fn float(value: f64) -> Value {
    Number::from_f64(value).map(Value::Number).unwrap_or(Value::Null)
}
