//! Shape templates
//!
//! A template is a mapping that says which keys survive projection. Each key
//! maps either to a *marker* (any non-mapping value, conventionally `null`),
//! which keeps the document value as is, or to a nested mapping, which keeps
//! the key and projects its value recursively.
//!
//! ```text
//! {"metadata": {"name": null}, "kind": null}
//!      │            └─ marker: keep verbatim
//!      └─ sub-template: descend
//! ```
//!
//! Compiling the mapping into a [`Template`] once lets the same selection be
//! applied to any number of documents.

use std::fmt;

use indexmap::IndexMap;

use crate::error::{type_name, PluckError};
use crate::value::{Mapping, Value};

/// What to do with one template key.
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    /// Keep the document value verbatim. Holds the original marker.
    Keep(Value),

    /// Keep the key and project its value with this sub-template
    Nested(Template),
}

impl Selector {
    /// Rebuild the template value this selector was compiled from
    pub fn to_value(&self) -> Value {
        match self {
            Selector::Keep(marker) => marker.clone(),
            Selector::Nested(sub) => sub.to_value(),
        }
    }
}

/// A compiled shape template.
///
/// # Example
///
/// ```
/// use pluck::{Mapping, Template, Value};
///
/// let template = Template::new()
///     .keep("kind")
///     .nested("metadata", Template::new().keep("name"));
///
/// let raw = Mapping::new()
///     .with_entry("kind", Value::null())
///     .with_entry("metadata", Mapping::new().with_entry("name", Value::null()));
///
/// assert_eq!(Template::from(&raw), template);
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Template {
    selectors: IndexMap<String, Selector>,
}

impl Template {
    /// Create an empty template (selects nothing)
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `key` verbatim with a `null` marker (builder pattern)
    pub fn keep(mut self, key: impl Into<String>) -> Self {
        self.selectors.insert(key.into(), Selector::Keep(Value::null()));
        self
    }

    /// Select `key` and project it with `sub` (builder pattern)
    pub fn nested(mut self, key: impl Into<String>, sub: Template) -> Self {
        self.selectors.insert(key.into(), Selector::Nested(sub));
        self
    }

    /// Look up the selector for `key`
    pub fn get(&self, key: &str) -> Option<&Selector> {
        self.selectors.get(key)
    }

    /// Number of selected keys at this level
    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    /// Check if this level selects nothing
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// Iterate over selectors in template order
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Selector> {
        self.selectors.iter()
    }

    /// Rebuild the template mapping this was compiled from.
    pub fn to_value(&self) -> Value {
        Value::mapping(
            self.selectors
                .iter()
                .map(|(k, s)| (k.clone(), s.to_value()))
                .collect(),
        )
    }
}

impl From<&Mapping> for Template {
    fn from(raw: &Mapping) -> Self {
        let selectors = raw
            .iter()
            .map(|(key, value)| {
                let selector = match value {
                    Value::Mapping(sub) => Selector::Nested(Template::from(&**sub)),
                    marker => Selector::Keep(marker.clone()),
                };
                (key.clone(), selector)
            })
            .collect();
        Self { selectors }
    }
}

impl TryFrom<&Value> for Template {
    type Error = PluckError;

    fn try_from(raw: &Value) -> Result<Self, Self::Error> {
        match raw {
            Value::Mapping(m) => Ok(Template::from(&**m)),
            other => Err(PluckError::TemplateNotMapping {
                found: type_name(other),
            }),
        }
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_value(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_any_non_mapping_is_a_marker() {
        let raw = Mapping::new()
            .with_entry("a", Value::null())
            .with_entry("b", true)
            .with_entry("c", Value::sequence(vec![Value::from(1i64)]))
            .with_entry("d", "anything");
        let template = Template::from(&raw);

        assert_eq!(template.len(), 4);
        assert!(template.iter().all(|(_, s)| matches!(s, Selector::Keep(_))));
        assert_eq!(template.get("b"), Some(&Selector::Keep(Value::from(true))));
        assert!(matches!(template.get("c"), Some(Selector::Keep(_))));
    }

    #[test]
    fn test_nested_mapping_becomes_sub_template() {
        let raw = Mapping::new().with_entry(
            "spec",
            Mapping::new().with_entry("containers", Mapping::new().with_entry("name", Value::null())),
        );
        let template = Template::from(&raw);

        let Some(Selector::Nested(spec)) = template.get("spec") else {
            panic!("expected nested selector");
        };
        let Some(Selector::Nested(containers)) = spec.get("containers") else {
            panic!("expected nested selector");
        };
        assert_eq!(containers.get("name"), Some(&Selector::Keep(Value::null())));
    }

    #[test]
    fn test_empty_mapping_is_an_empty_sub_template() {
        let raw = Mapping::new().with_entry("labels", Mapping::new());
        let template = Template::from(&raw);
        assert_eq!(template.get("labels"), Some(&Selector::Nested(Template::new())));
    }

    #[test]
    fn test_to_value_rebuilds_source() {
        let raw = Mapping::new()
            .with_entry("a", Value::null())
            .with_entry("b", Mapping::new().with_entry("c", 1i64));
        let template = Template::from(&raw);
        assert_eq!(template.to_value(), Value::mapping(raw));
    }

    #[test]
    fn test_try_from_value_rejects_non_mapping_root() {
        let err = Template::try_from(&Value::sequence(vec![])).unwrap_err();
        assert!(matches!(
            err,
            PluckError::TemplateNotMapping { found: "sequence" }
        ));

        let ok = Template::try_from(&Value::mapping(Mapping::new())).unwrap();
        assert!(ok.is_empty());
    }

    #[test]
    fn test_builder_matches_compiled() {
        let built = Template::new()
            .keep("a")
            .nested("b", Template::new().keep("c"));
        let raw = Mapping::new()
            .with_entry("a", Value::null())
            .with_entry("b", Mapping::new().with_entry("c", Value::null()));
        assert_eq!(built, Template::from(&raw));
        assert_eq!(format!("{:?}", built), r#"{"a": null, "b": {"c": null}}"#);
    }
}
