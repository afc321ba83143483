use std::fmt;

use uuid::Uuid;

/// Identifier attached to a single search for log correlation.
///
/// Never part of the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchId(Uuid);

impl SearchId {
    /// Creates a new random `SearchId`.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SearchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SearchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
