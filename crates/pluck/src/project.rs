//! The projector: filter a document down to the keys a template selects
//!
//! Projection is driven entirely by the template. For every template key
//! that the document also has:
//!
//! - a marker copies the document value as is;
//! - a sub-template recurses into a mapping, or into every element of a
//!   sequence of mappings, building a fresh sequence of the same length.
//!
//! Template keys the document lacks are skipped. A sub-template that meets
//! a scalar, or a sequence element that is not a mapping, aborts the whole
//! projection with a [`ShapeMismatch`] naming the location.
//!
//! Inputs are never modified; the output shares untouched subtrees with the
//! input through `Arc`.

use tracing::{debug, trace};

use crate::context::ProjectContext;
use crate::error::{type_name, PluckError, ShapeMismatch};
use crate::path::Path;
use crate::template::{Selector, Template};
use crate::value::{Mapping, Value};

/// Trait for values a template can be applied to.
pub trait Project: Sized {
    /// Project this value with `template`, reporting errors relative to
    /// `path`.
    fn project<'t>(
        &self,
        template: &'t Template,
        path: &mut Path<'t>,
        ctx: &ProjectContext,
    ) -> Result<Self, ShapeMismatch>;
}

impl Project for Mapping {
    fn project<'t>(
        &self,
        template: &'t Template,
        path: &mut Path<'t>,
        ctx: &ProjectContext,
    ) -> Result<Mapping, ShapeMismatch> {
        let mut out = Mapping::with_capacity(template.len());

        for (key, selector) in template.iter() {
            let Some(value) = self.get(key) else {
                // Missing keys are dropped, never an error
                debug!(path = %path, key = %key, "key not in document, skipping");
                continue;
            };

            let projected = match selector {
                Selector::Keep(_) => value.clone(),
                Selector::Nested(sub) => {
                    let mut path = path.field_guard(key);
                    project_nested(value, sub, &mut path, ctx)?
                }
            };
            out.insert(key.clone(), projected);
        }

        Ok(out)
    }
}

/// Apply a sub-template to whatever the document holds at `path`.
fn project_nested<'t>(
    value: &Value,
    template: &'t Template,
    path: &mut Path<'t>,
    ctx: &ProjectContext,
) -> Result<Value, ShapeMismatch> {
    match value {
        Value::Mapping(m) => {
            if ctx.trace {
                trace!(
                    path = %path,
                    depth = path.depth(),
                    keys = template.len(),
                    "projecting mapping"
                );
            }
            Ok(Value::mapping(m.project(template, path, ctx)?))
        }
        Value::Sequence(items) => {
            if ctx.trace {
                trace!(
                    path = %path,
                    depth = path.depth(),
                    len = items.len(),
                    "projecting sequence"
                );
            }
            Ok(Value::sequence(project_sequence(items, template, path, ctx)?))
        }
        Value::Scalar(_) => Err(mismatch(path, template, value)),
    }
}

/// Project every element of a sequence, in order, into a new sequence.
fn project_sequence<'t>(
    items: &[Value],
    template: &'t Template,
    path: &mut Path<'t>,
    ctx: &ProjectContext,
) -> Result<Vec<Value>, ShapeMismatch> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let mut path = path.index_guard(index);
            match item {
                Value::Mapping(m) => Ok(Value::mapping(m.project(template, &mut path, ctx)?)),
                other => Err(mismatch(&path, template, other)),
            }
        })
        .collect()
}

fn mismatch(path: &Path<'_>, template: &Template, value: &Value) -> ShapeMismatch {
    let err = ShapeMismatch {
        path: path.to_string(),
        template: template.to_value(),
        value: value.clone(),
    };
    debug!(path = %err.path, found = type_name(value), "template does not fit document");
    err
}

// ═══════════════════════════════════════════════════════════════════════
// Entry Points
// ═══════════════════════════════════════════════════════════════════════

/// Project a document with default options.
///
/// # Example
///
/// ```
/// use pluck::{project, Mapping, Template, Value};
///
/// let document = Mapping::new()
///     .with_entry("kind", "DaemonSet")
///     .with_entry("status", "Running");
/// let template = Template::new().keep("kind").keep("apiVersion");
///
/// let out = project(&document, &template).unwrap();
/// assert_eq!(out, Mapping::new().with_entry("kind", "DaemonSet"));
/// ```
///
/// # Errors
///
/// Returns `ShapeMismatch` if a sub-template meets a value that is neither
/// a mapping nor a sequence of mappings.
pub fn project(document: &Mapping, template: &Template) -> Result<Mapping, ShapeMismatch> {
    project_with(document, template, &ProjectContext::default())
}

/// Project a document with explicit options.
pub fn project_with(
    document: &Mapping,
    template: &Template,
    ctx: &ProjectContext,
) -> Result<Mapping, ShapeMismatch> {
    let mut path = Path::root();
    document.project(template, &mut path, ctx)
}

/// Project a document that may not exist.
///
/// An absent document projects to an absent result, not to an empty
/// mapping.
pub fn project_optional(
    document: Option<&Mapping>,
    template: &Template,
) -> Result<Option<Mapping>, ShapeMismatch> {
    document.map(|doc| project(doc, template)).transpose()
}

/// Project at the value level, as decoded straight from JSON.
///
/// A `null` document is the "no value" case and projects to `null`.
///
/// # Errors
///
/// Returns `TemplateNotMapping` or `DocumentNotMapping` when a root is the
/// wrong shape, and `ShapeMismatch` from projection itself.
pub fn project_value(document: &Value, template: &Value) -> Result<Value, PluckError> {
    project_value_with(document, template, &ProjectContext::default())
}

/// Project at the value level with explicit options.
pub fn project_value_with(
    document: &Value,
    template: &Value,
    ctx: &ProjectContext,
) -> Result<Value, PluckError> {
    let template = Template::try_from(template)?;
    match document {
        Value::Mapping(m) => Ok(Value::mapping(project_with(m, &template, ctx)?)),
        Value::Scalar(s) if s.is_null() => Ok(Value::null()),
        other => Err(PluckError::DocumentNotMapping {
            found: type_name(other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn container(name: &str, image: &str) -> Value {
        Value::mapping(
            Mapping::new()
                .with_entry("name", name)
                .with_entry("image", image)
                .with_entry("imagePullPolicy", "IfNotPresent"),
        )
    }

    #[test]
    fn test_marker_keeps_value() {
        let doc = Mapping::new().with_entry("a", "x").with_entry("b", 2i64);
        let out = project(&doc, &Template::new().keep("a")).unwrap();
        assert_eq!(out, Mapping::new().with_entry("a", "x"));
    }

    #[test]
    fn test_missing_key_is_skipped() {
        let doc = Mapping::new().with_entry("a", "x");
        let out = project(&doc, &Template::new().keep("a").keep("zzz")).unwrap();
        assert!(!out.contains_key("zzz"));
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_missing_nested_key_is_skipped() {
        let doc = Mapping::new().with_entry("a", "x");
        let template = Template::new().nested("b", Template::new().keep("c"));
        assert_eq!(project(&doc, &template).unwrap(), Mapping::new());
    }

    #[test]
    fn test_nested_mapping() {
        let doc = Mapping::new().with_entry(
            "b",
            Mapping::new().with_entry("c", 1i64).with_entry("d", 2i64),
        );
        let template = Template::new().nested("b", Template::new().keep("c"));
        let out = project(&doc, &template).unwrap();
        assert_eq!(
            out,
            Mapping::new().with_entry("b", Mapping::new().with_entry("c", 1i64))
        );
    }

    #[test]
    fn test_present_parent_missing_children_is_empty_mapping() {
        let doc = Mapping::new().with_entry("labels", Mapping::new().with_entry("app", "busy-dm"));
        let template = Template::new().nested("labels", Template::new().keep("app2"));
        let out = project(&doc, &template).unwrap();
        assert_eq!(out.get("labels"), Some(&Value::mapping(Mapping::new())));
    }

    #[test]
    fn test_sequence_of_mappings() {
        let doc = Mapping::new().with_entry(
            "containers",
            Value::sequence(vec![container("busybox", "busybox"), container("nginx", "nginx")]),
        );
        let template = Template::new().nested("containers", Template::new().keep("name"));
        let out = project(&doc, &template).unwrap();

        let expected = Value::sequence(vec![
            Value::mapping(Mapping::new().with_entry("name", "busybox")),
            Value::mapping(Mapping::new().with_entry("name", "nginx")),
        ]);
        assert_eq!(out.get("containers"), Some(&expected));
    }

    #[test]
    fn test_empty_sequence_stays_empty() {
        let doc = Mapping::new().with_entry("e", Value::sequence(vec![]));
        let template = Template::new().nested("e", Template::new().keep("f"));
        let out = project(&doc, &template).unwrap();
        assert_eq!(out.get("e"), Some(&Value::sequence(vec![])));
    }

    #[test]
    fn test_input_sequence_is_not_modified() {
        let original = Value::sequence(vec![container("busybox", "busybox")]);
        let doc = Mapping::new().with_entry("containers", original.clone());
        let template = Template::new().nested("containers", Template::new().keep("name"));

        let _ = project(&doc, &template).unwrap();
        assert_eq!(doc.get("containers"), Some(&original));
    }

    #[test]
    fn test_scalar_under_sub_template_fails() {
        let doc = Mapping::new().with_entry("a", "x");
        let template = Template::new().nested("a", Template::new().keep("c"));
        let err = project(&doc, &template).unwrap_err();

        assert_eq!(err.path, "a");
        assert_eq!(err.value, Value::string("x"));
        assert_eq!(err.template, Template::new().keep("c").to_value());
    }

    #[test]
    fn test_non_mapping_element_fails_at_index() {
        let doc = Mapping::new().with_entry(
            "spec",
            Mapping::new().with_entry(
                "containers",
                Value::sequence(vec![container("a", "a"), Value::string("oops")]),
            ),
        );
        let template = Template::new().nested(
            "spec",
            Template::new().nested("containers", Template::new().keep("name")),
        );
        let err = project(&doc, &template).unwrap_err();

        assert_eq!(err.path, "spec.containers[1]");
        assert_eq!(err.value, Value::string("oops"));
    }

    #[test]
    fn test_error_inside_sequence_element() {
        let doc = Mapping::new().with_entry(
            "e",
            Value::sequence(vec![Value::mapping(Mapping::new().with_entry("f", 1i64))]),
        );
        let template = Template::new().nested("e", Template::new().nested("f", Template::new()));
        let err = project(&doc, &template).unwrap_err();
        assert_eq!(err.path, "e[0].f");
        assert_eq!(err.value, Value::from(1i64));
    }

    #[test]
    fn test_first_bad_element_wins() {
        let doc = Mapping::new().with_entry(
            "e",
            Value::sequence(vec![Value::from(1i64), Value::from(2i64)]),
        );
        let template = Template::new().nested("e", Template::new());
        let err = project(&doc, &template).unwrap_err();
        assert_eq!(err.path, "e[0]");
    }

    #[test]
    fn test_project_optional_absent_stays_absent() {
        let template = Template::new().keep("a");
        assert_eq!(project_optional(None, &template).unwrap(), None);

        let doc = Mapping::new();
        assert_eq!(project_optional(Some(&doc), &template).unwrap(), Some(Mapping::new()));
    }

    #[test]
    fn test_project_value_null_document() {
        let template = Value::mapping(Mapping::new().with_entry("a", Value::null()));
        assert_eq!(project_value(&Value::null(), &template).unwrap(), Value::null());
    }

    #[test]
    fn test_project_value_root_shapes() {
        let template = Value::mapping(Mapping::new());
        let err = project_value(&Value::from(1i64), &template).unwrap_err();
        assert!(matches!(err, PluckError::DocumentNotMapping { found: "number" }));

        let err = project_value(&Value::mapping(Mapping::new()), &Value::null()).unwrap_err();
        assert!(matches!(err, PluckError::TemplateNotMapping { found: "null" }));
    }

    #[test]
    fn test_traced_context_projects_identically() {
        let doc = Mapping::new().with_entry("b", Mapping::new().with_entry("c", 1i64));
        let template = Template::new().nested("b", Template::new().keep("c"));
        assert_eq!(
            project_with(&doc, &template, &ProjectContext::traced()).unwrap(),
            project(&doc, &template).unwrap()
        );
    }
}
