//! Document locations for diagnostics
//!
//! A [`Path`] is grown and shrunk as the projector descends and returns.
//! It never influences projection; it only names the place a mismatch was
//! found, rendered as `spec.containers[1].name`.

use std::fmt;

/// One step into a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Mapping key
    Field(&'a str),

    /// Sequence position
    Index(usize),
}

/// Location within a document, borrowed from the template's keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> Path<'a> {
    /// The root location (renders as the empty string)
    pub fn root() -> Self {
        Self::default()
    }

    /// Number of segments
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Check if this is the root location
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Descend into a mapping key
    pub fn push_field(&mut self, name: &'a str) {
        self.segments.push(Segment::Field(name));
    }

    /// Descend into a sequence position
    pub fn push_index(&mut self, index: usize) {
        self.segments.push(Segment::Index(index));
    }

    /// Step back out of the innermost segment
    pub fn pop(&mut self) -> Option<Segment<'a>> {
        self.segments.pop()
    }

    /// Push a field now and pop it when the guard is dropped.
    pub fn field_guard(&mut self, name: &'a str) -> PathGuard<'_, 'a> {
        self.push_field(name);
        PathGuard { path: self }
    }

    /// Push an index now and pop it when the guard is dropped.
    pub fn index_guard(&mut self, index: usize) -> PathGuard<'_, 'a> {
        self.push_index(index);
        PathGuard { path: self }
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Field(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// RAII guard that pops one path segment when dropped.
///
/// # Example
///
/// ```
/// use pluck::Path;
///
/// let mut path = Path::root();
/// {
///     let mut spec = path.field_guard("spec");
///     let containers = spec.field_guard("containers");
///     assert_eq!(containers.to_string(), "spec.containers");
/// }
/// assert!(path.is_root());
/// ```
pub struct PathGuard<'p, 'a> {
    path: &'p mut Path<'a>,
}

impl Drop for PathGuard<'_, '_> {
    fn drop(&mut self) {
        self.path.pop();
    }
}

impl<'a> std::ops::Deref for PathGuard<'_, 'a> {
    type Target = Path<'a>;

    fn deref(&self) -> &Self::Target {
        self.path
    }
}

impl<'a> std::ops::DerefMut for PathGuard<'_, 'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_renders_empty() {
        let path = Path::root();
        assert!(path.is_root());
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_fields_are_dotted() {
        let mut path = Path::root();
        path.push_field("spec");
        path.push_field("template");
        assert_eq!(path.to_string(), "spec.template");
        assert_eq!(path.depth(), 2);
    }

    #[test]
    fn test_indices_are_bracketed() {
        let mut path = Path::root();
        path.push_field("spec");
        path.push_field("containers");
        path.push_index(1);
        assert_eq!(path.to_string(), "spec.containers[1]");

        path.push_field("name");
        assert_eq!(path.to_string(), "spec.containers[1].name");
    }

    #[test]
    fn test_leading_index() {
        let mut path = Path::root();
        path.push_index(0);
        path.push_field("a");
        assert_eq!(path.to_string(), "[0].a");
    }

    #[test]
    fn test_pop() {
        let mut path = Path::root();
        path.push_field("a");
        path.push_index(2);
        assert_eq!(path.pop(), Some(Segment::Index(2)));
        assert_eq!(path.pop(), Some(Segment::Field("a")));
        assert_eq!(path.pop(), None);
    }

    #[test]
    fn test_guard_pops_on_drop() {
        let mut path = Path::root();
        {
            let mut outer = path.field_guard("e");
            {
                let inner = outer.index_guard(3);
                assert_eq!(inner.to_string(), "e[3]");
            }
            assert_eq!(outer.to_string(), "e");
        }
        assert!(path.is_root());
    }
}
