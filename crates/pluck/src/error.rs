//! Error types for projection and decoding

use thiserror::Error;

use crate::value::{Scalar, Value};

/// A template asked to descend into something that is not a mapping or a
/// sequence of mappings.
///
/// This is the only way projection itself can fail.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("can't apply filter {template:?} on {path}: {value}")]
pub struct ShapeMismatch {
    /// Where the mismatch was found, e.g. `spec.containers[1]`
    pub path: String,

    /// The sub-template that could not be applied
    pub template: Value,

    /// The document value found at `path`
    pub value: Value,
}

/// Main error type for pluck operations
#[derive(Error, Debug)]
pub enum PluckError {
    /// Template and document disagree on shape
    #[error(transparent)]
    ShapeMismatch(#[from] ShapeMismatch),

    /// The template root is not a mapping
    #[error("template must be a mapping, got {found}")]
    TemplateNotMapping {
        /// Shape of the value supplied as template
        found: &'static str,
    },

    /// The document root is not a mapping
    #[error("document must be a mapping, got {found}")]
    DocumentNotMapping {
        /// Shape of the value supplied as document
        found: &'static str,
    },

    /// JSON decoding or encoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pluck operations
pub type Result<T> = std::result::Result<T, PluckError>;

/// Get a human-readable name for a value's shape.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Mapping(_) => "mapping",
        Value::Sequence(_) => "sequence",
        Value::Scalar(Scalar::Null) => "null",
        Value::Scalar(Scalar::Bool(_)) => "boolean",
        Value::Scalar(Scalar::I64(_) | Scalar::U64(_) | Scalar::F64(_)) => "number",
        Value::Scalar(Scalar::String(_)) => "string",
    }
}
