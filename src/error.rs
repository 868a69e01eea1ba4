//! Error handling module for umctui
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the application should use these types for consistency.

use thiserror::Error;

/// Main error type for umctui
#[derive(Error, Debug)]
pub enum SelectorError {
    /// IO errors (catalog files, terminal, export)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog errors (loading, parsing, integrity)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for selector operations
pub type Result<T> = std::result::Result<T, SelectorError>;

impl SelectorError {
    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}

/// Validation failure raised when generating a summary.
///
/// This is the only rule the summary generator enforces: the base
/// controller section must have a selection. Toggling options can never
/// fail, so this type carries no data beyond its kind.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// No base controller selected in Section A
    #[error("a base controller must be selected in Section A")]
    MissingMandatorySection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SelectorError::catalog("duplicate option id");
        assert_eq!(err.to_string(), "Catalog error: duplicate option id");

        let err = SelectorError::terminal("failed to enter raw mode");
        assert_eq!(err.to_string(), "Terminal error: failed to enter raw mode");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SelectorError = io_err.into();
        assert!(matches!(err, SelectorError::Io(_)));
    }

    #[test]
    fn test_validation_error_message_mentions_section_a() {
        let err = ValidationError::MissingMandatorySection;
        assert!(err.to_string().contains("Section A"));
    }
}
