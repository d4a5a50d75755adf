//! JSON decoding and encoding for [`Value`]
//!
//! Standard mapping: object ↔ `Mapping`, array ↔ `Sequence`, everything
//! else ↔ `Scalar`. Object key order is preserved on decode.

use std::io::Read;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;
use crate::project::project_value;
use crate::value::{Mapping, Scalar, Value};

// ═══════════════════════════════════════════════════════════════════════
// serde
// ═══════════════════════════════════════════════════════════════════════

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::I64(n) => serializer.serialize_i64(*n),
            Scalar::U64(n) => serializer.serialize_u64(*n),
            Scalar::F64(n) => serializer.serialize_f64(*n),
            Scalar::String(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.entries().serialize(serializer)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Mapping(m) => Mapping::serialize(m, serializer),
            Value::Sequence(items) => items.as_slice().serialize(serializer),
            Value::Scalar(s) => s.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// serde_json::Value conversions
// ═══════════════════════════════════════════════════════════════════════

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::null(),
            serde_json::Value::Bool(b) => Value::from(b),
            serde_json::Value::Number(n) => Value::Scalar(number_to_scalar(&n)),
            serde_json::Value::String(s) => Value::string(s),
            serde_json::Value::Array(items) => {
                Value::sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::mapping(fields.into_iter().collect()),
        }
    }
}

fn number_to_scalar(n: &serde_json::Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::I64(i)
    } else if let Some(u) = n.as_u64() {
        Scalar::U64(u)
    } else {
        // Every finite JSON number fits f64
        Scalar::F64(n.as_f64().unwrap_or(f64::NAN))
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Mapping(m) => serde_json::Value::Object(
                m.iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect(),
            ),
            Value::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Scalar(Scalar::Null) => serde_json::Value::Null,
            Value::Scalar(Scalar::Bool(b)) => serde_json::Value::Bool(*b),
            Value::Scalar(Scalar::I64(n)) => serde_json::Value::from(*n),
            Value::Scalar(Scalar::U64(n)) => serde_json::Value::from(*n),
            // Non-finite floats have no JSON form and become null
            Value::Scalar(Scalar::F64(n)) => serde_json::Value::from(*n),
            Value::Scalar(Scalar::String(s)) => serde_json::Value::String(s.as_str().to_owned()),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Decode a value from JSON text.
pub fn from_str(s: &str) -> Result<Value> {
    Ok(serde_json::from_str(s)?)
}

/// Decode a value from a JSON byte stream.
pub fn from_reader(reader: impl Read) -> Result<Value> {
    Ok(serde_json::from_reader(reader)?)
}

/// Encode a value as compact JSON.
pub fn to_string(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Encode a value as indented JSON.
pub fn to_string_pretty(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Decode a document and a template and project one with the other.
///
/// # Example
///
/// ```
/// let out = pluck::json::project_str(
///     r#"{"a": "x", "b": {"c": 1, "d": 2}}"#,
///     r#"{"a": null, "b": {"c": null}}"#,
/// )
/// .unwrap();
/// assert_eq!(pluck::json::to_string(&out).unwrap(), r#"{"a":"x","b":{"c":1}}"#);
/// ```
pub fn project_str(document: &str, template: &str) -> Result<Value> {
    let document = from_str(document)?;
    let template = from_str(template)?;
    project_value(&document, &template)
}
