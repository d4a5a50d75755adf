//! Value representation for documents and templates

mod display;
mod impls;
mod mapping;
mod scalar;

pub use mapping::Mapping;
pub use scalar::Scalar;

use std::sync::Arc;

/// A JSON-like document node.
///
/// Compound nodes are `Arc`-wrapped, so cloning a value (for example when a
/// marker passes a whole subtree through) never deep-copies it, and values
/// can be shared across threads freely.
///
/// There is no "absent" variant: a key that is not present shows up as
/// `None` from [`Mapping::get`], and never as a stored value.
#[derive(Clone, PartialEq)]
pub enum Value {
    /// Keyed collection (JSON object)
    Mapping(Arc<Mapping>),

    /// Ordered list (JSON array)
    Sequence(Arc<Vec<Value>>),

    /// Leaf (string, number, boolean or null)
    Scalar(Scalar),
}
