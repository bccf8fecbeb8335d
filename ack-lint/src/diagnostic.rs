//! Diagnostic types for the validation pass.
//!
//! Lints push diagnostics into a shared list instead of failing fast, so one
//! run reports every problem in the config.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A configuration error the generator must not run with.
    Error,
    /// Suspicious but usable configuration.
    Warning,
}

impl Severity {
    /// Returns true if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message produced by a lint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The lint that produced this diagnostic.
    pub lint: &'static str,
    /// The diagnostic message.
    pub message: String,
    /// Optional location in the config (e.g., "resources.Topic.exceptions").
    pub location: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(lint: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            lint,
            message: message.into(),
            location: None,
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(lint: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            lint,
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.lint, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_error() {
        let diag = Diagnostic::error("name-field", "empty name_field");
        assert!(diag.severity.is_error());
        assert_eq!(diag.lint, "name-field");
    }

    #[test]
    fn test_diagnostic_with_location() {
        let diag = Diagnostic::warning("list-operation", "duplicate match field")
            .at("resources.Bucket.list_operation");
        assert_eq!(
            diag.location.as_deref(),
            Some("resources.Bucket.list_operation")
        );
        assert_eq!(
            diag.to_string(),
            "warning[list-operation]: duplicate match field (at resources.Bucket.list_operation)"
        );
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn test_serialize() {
        let diag = Diagnostic::error("exception-codes", "bad code").at("resources.Topic");
        let value = serde_json::to_value(&diag).unwrap();
        assert_eq!(value["severity"], "error");
        assert_eq!(value["lint"], "exception-codes");
        assert_eq!(value["location"], "resources.Topic");
    }
}
