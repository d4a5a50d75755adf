//! # Pluck
//!
//! Structural projection for JSON-like documents.
//!
//! Given a document and a *shape template* (a mapping that mirrors the parts
//! of the document to keep), pluck returns a new document with only the
//! selected keys, descending into nested mappings and into sequences of
//! mappings.
//!
//! ```
//! use pluck::json;
//!
//! let out = json::project_str(
//!     r#"{"a":"x","b":{"c":1,"d":2},"e":[{"f":1,"g":2},{"f":3,"g":4}]}"#,
//!     r#"{"a":null,"b":{"c":null},"e":{"f":null}}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     json::to_string(&out).unwrap(),
//!     r#"{"a":"x","b":{"c":1},"e":[{"f":1},{"f":3}]}"#,
//! );
//! ```
//!
//! ## Architecture
//!
//! - **Value**: tagged document tree (mapping, sequence, scalar)
//! - **Template**: compiled selection, reusable across documents
//! - **Projector**: the recursive filter, reporting the first shape
//!   mismatch with its path
//! - **JSON**: decoding and encoding through `serde_json`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod json;
pub mod path;
pub mod project;
pub mod template;
pub mod value;

// Re-export main types
pub use context::ProjectContext;
pub use error::{PluckError, Result, ShapeMismatch};
pub use path::{Path, PathGuard, Segment};
pub use project::{
    project, project_optional, project_value, project_value_with, project_with, Project,
};
pub use template::{Selector, Template};
pub use value::{Mapping, Scalar, Value};

/// Pluck version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
