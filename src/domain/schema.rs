//! Record schema validation
//!
//! The data file must be a JSON array whose every element is an object
//! with a string `name`, a string `product` and a numeric `price`.
//! Validation walks the whole document and collects every violation
//! instead of stopping at the first one.

use std::fmt;

use serde_json::Value;

/// Required fields of a shop record and the JSON type each must have
const REQUIRED_FIELDS: [(&str, FieldKind); 3] = [
    ("name", FieldKind::String),
    ("product", FieldKind::String),
    ("price", FieldKind::Number),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    String,
    Number,
}

impl FieldKind {
    fn matches(self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Number => value.is_number(),
        }
    }

    fn label(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
        }
    }
}

/// One schema violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Where in the document the violation is (`$`, `[2]`, `[2].price`)
    pub location: String,
    pub message: String,
}

impl ValidationError {
    fn new(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Returns the JSON type name of a value, as used in error messages
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Validates a parsed data file document
///
/// Returns every violation found, in document order. An empty vector
/// means the document is a valid record list.
pub fn validate_records(document: &Value) -> Vec<ValidationError> {
    let items = match document {
        Value::Array(items) => items,
        other => {
            return vec![ValidationError::new(
                "$",
                format!("expected array, found {}", type_name(other)),
            )];
        }
    };

    let mut errors = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let object = match item {
            Value::Object(object) => object,
            other => {
                errors.push(ValidationError::new(
                    format!("[{}]", index),
                    format!("expected object, found {}", type_name(other)),
                ));
                continue;
            }
        };

        for (field, kind) in REQUIRED_FIELDS {
            match object.get(field) {
                None => errors.push(ValidationError::new(
                    format!("[{}]", index),
                    format!("'{}' is a required property", field),
                )),
                Some(value) if !kind.matches(value) => errors.push(ValidationError::new(
                    format!("[{}].{}", index, field),
                    format!("expected {}, found {}", kind.label(), type_name(value)),
                )),
                Some(_) => {}
            }
        }
    }

    errors
}
