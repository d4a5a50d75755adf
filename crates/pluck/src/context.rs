//! Projection context configuration

/// Options passed through every projection call.
#[derive(Debug, Clone, Default)]
pub struct ProjectContext {
    /// Whether to emit a `trace` event for every node visited (for debugging)
    pub trace: bool,
}

impl ProjectContext {
    /// Create a context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context that traces every visited node.
    pub fn traced() -> Self {
        Self { trace: true }
    }
}
