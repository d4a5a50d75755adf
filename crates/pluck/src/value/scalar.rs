//! Leaf values carried through projection untouched

use std::sync::Arc;

/// A leaf value: null, boolean, number or string.
///
/// The projector never looks inside a scalar. Numbers keep the width they
/// were decoded with so that a round trip through JSON is lossless.
#[derive(Clone, PartialEq)]
pub enum Scalar {
    /// JSON `null`
    Null,

    /// Boolean: `true` or `false`
    Bool(bool),

    /// Integer that fits in 64 signed bits
    I64(i64),

    /// Positive integer above `i64::MAX`
    U64(u64),

    /// Floating point number
    F64(f64),

    /// Shared string
    String(Arc<String>),
}

impl Scalar {
    /// Create a string scalar
    pub fn string(s: impl Into<String>) -> Self {
        Scalar::String(Arc::new(s.into()))
    }

    /// Check if this is `null`
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Check if this is any numeric scalar
    pub fn is_number(&self) -> bool {
        matches!(self, Scalar::I64(_) | Scalar::U64(_) | Scalar::F64(_))
    }

    /// Borrow the string contents, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Extract a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract an integer as `i64`, if it fits
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::I64(n) => Some(*n),
            Scalar::U64(n) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    /// Extract any number as `f64`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::I64(n) => Some(*n as f64),
            Scalar::U64(n) => Some(*n as f64),
            Scalar::F64(n) => Some(*n),
            _ => None,
        }
    }
}
