//! Render correlation ids.

use std::sync::atomic::{AtomicU32, Ordering};

/// Identifier tying together the log lines of one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderId(pub String);

static SEQUENCE: AtomicU32 = AtomicU32::new(0);

impl RenderId {
    /// Generate a new id from the wall clock and a process-wide counter.
    pub fn generate() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!("{:x}-{:x}", nanos, seq))
    }

    /// Create from an existing id string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RenderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
