//! Configuration errors.

use std::fmt;
use std::path::PathBuf;

/// Errors raised while loading `docs.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {0}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    // No #[from]: the diagnostics list is the whole message
    #[error("{0}")]
    Invalid(Diagnostics),
}

impl ConfigError {
    /// Validation issues, if this is a validation failure.
    pub fn issues(&self) -> &[Issue] {
        match self {
            ConfigError::Invalid(diag) => diag.issues(),
            _ => &[],
        }
    }
}

/// A single problem with one config field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Dotted field path, e.g. `project.link`
    pub field: &'static str,
    /// What is wrong
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All issues found in one config file.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    issues: Vec<Issue>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an issue against a field.
    pub fn error(&mut self, field: &'static str, message: impl Into<String>) {
        self.issues.push(Issue {
            field,
            message: message.into(),
        });
    }

    /// Record that a required field is absent.
    pub fn missing(&mut self, field: &'static str) {
        self.error(field, "required field is missing");
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid configuration ({} issue", self.issues.len())?;
        if self.issues.len() != 1 {
            write!(f, "s")?;
        }
        write!(f, ")")?;
        for issue in &self.issues {
            write!(f, "\n  - {}", issue)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_every_issue() {
        let mut diag = Diagnostics::new();
        diag.missing("footer.text");
        diag.error("project.link", "invalid URL");

        let text = diag.to_string();

        assert!(text.starts_with("invalid configuration (2 issues)"));
        assert!(text.contains("  - footer.text: required field is missing"));
        assert!(text.contains("  - project.link: invalid URL"));
    }

    #[test]
    fn singular_issue_count() {
        let mut diag = Diagnostics::new();
        diag.missing("logo.text");

        assert!(diag.to_string().starts_with("invalid configuration (1 issue)"));
        assert_eq!(diag.issues()[0].field, "logo.text");
    }
}
