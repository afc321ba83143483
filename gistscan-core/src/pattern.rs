use std::fmt;

use regex::Regex;

use crate::error::CoreError;

/// A compiled, caller-supplied regular expression.
///
/// Matching is unanchored: a body matches if the expression occurs anywhere
/// in it. Syntax is that of the `regex` crate, so look-around and
/// backreferences are rejected at construction.
#[derive(Debug, Clone)]
pub struct SearchPattern(Regex);

impl SearchPattern {
    /// Compiles `pattern`.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidPattern`] if `pattern` does not compile.
    pub fn new(pattern: &str) -> Result<Self, CoreError> {
        Regex::new(pattern)
            .map(Self)
            .map_err(|source| CoreError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })
    }

    /// Returns `true` if the pattern matches at least once in `haystack`.
    #[must_use]
    pub fn is_match(&self, haystack: &str) -> bool {
        self.0.is_match(haystack)
    }

    /// Returns the source text of the pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for SearchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for SearchPattern {
    type Error = CoreError;

    fn try_from(pattern: &str) -> Result<Self, Self::Error> {
        Self::new(pattern)
    }
}
