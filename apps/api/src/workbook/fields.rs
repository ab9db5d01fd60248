//! Field values and form data — the flat key/value record behind a workbook
//! submission.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::errors::AppError;

/// A single form field value: a checklist state or free text.
///
/// The wire format carries these as plain JSON booleans and strings. Any
/// other JSON shape is rejected at the boundary rather than stringified —
/// the form never produces one, so a mismatch means a broken client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
}

/// The flat key/value record submitted by the form. Keys arrive unordered;
/// grouping and ordering are the renderer's job.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    fields: HashMap<String, FieldValue>,
}

impl FormData {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Test helper for building forms without going through JSON.
    #[cfg(test)]
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    /// Converts the raw `formData` JSON object into typed field values.
    /// Fails with a validation error naming the first offending field.
    pub fn from_json_map(map: &Map<String, Value>) -> Result<Self, AppError> {
        let mut fields = HashMap::with_capacity(map.len());
        for (name, value) in map {
            let parsed = match value {
                Value::Bool(b) => FieldValue::Bool(*b),
                Value::String(s) => FieldValue::Text(s.clone()),
                other => {
                    return Err(AppError::Validation(format!(
                        "Field '{name}' must be a string or boolean, got {}",
                        json_type_name(other)
                    )))
                }
            };
            fields.insert(name.clone(), parsed);
        }
        Ok(FormData { fields })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
