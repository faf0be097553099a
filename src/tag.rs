use crate::error::{ReleaseError, Result};

const PLACEHOLDER: &str = "{version}";

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPattern {
    pub pattern: String,
}

impl TagPattern {
    /// Create a new tag pattern
    pub fn new(pattern: impl Into<String>) -> Self {
        TagPattern {
            pattern: pattern.into(),
        }
    }

    /// Check that the pattern has exactly one `{version}` placeholder
    pub fn validate(&self) -> Result<()> {
        match self.pattern.matches(PLACEHOLDER).count() {
            1 => Ok(()),
            0 => Err(ReleaseError::config(format!(
                "Tag pattern '{}' must contain a {{version}} placeholder",
                self.pattern
            ))),
            _ => Err(ReleaseError::config(format!(
                "Tag pattern '{}' should have exactly one {{version}} placeholder",
                self.pattern
            ))),
        }
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version="1.2.3" -> "v1.2.3"
    pub fn format(&self, version: &str) -> String {
        self.pattern.replace(PLACEHOLDER, version)
    }
}

impl Default for TagPattern {
    fn default() -> Self {
        TagPattern::new("v{version}")
    }
}
