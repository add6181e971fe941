//! Error types for the signup form engine
//!
//! Configuration errors are fatal and only produced while building an
//! engine from a schema. Failed rules are never errors; they show up in the
//! snapshot as `passed = false`.

use thiserror::Error;

/// Main error type for form operations
#[derive(Error, Debug)]
pub enum FormError {
    /// A field binds to a rule set that was never declared
    #[error("Field '{field}' references undeclared rule set '{rule_set}'")]
    UnknownRuleSet { field: String, rule_set: String },

    /// The same rule id appears twice in one rule set
    #[error("Rule '{rule}' is declared more than once in rule set '{rule_set}'")]
    DuplicateRule { rule_set: String, rule: String },

    /// Two rule sets share a name
    #[error("Rule set '{0}' is declared more than once")]
    DuplicateRuleSet(String),

    /// Two fields share an id
    #[error("Field '{0}' is declared more than once")]
    DuplicateField(String),

    /// The caller addressed a field the schema does not declare
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// File access or I/O error
    #[error("File error: {0}")]
    FileError(String),

    /// Schema or event file parsing error
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// The submission collaborator rejected the record
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),
}

impl FormError {
    /// Create an unknown field error
    pub fn unknown_field(field: impl Into<String>) -> Self {
        FormError::UnknownField(field.into())
    }

    /// Create a parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        FormError::ParseError(msg.into())
    }

    /// Create a submission error
    pub fn submission_failed(msg: impl Into<String>) -> Self {
        FormError::SubmissionFailed(msg.into())
    }

    /// Check if this error comes from an invalid schema declaration
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            FormError::UnknownRuleSet { .. }
                | FormError::DuplicateRule { .. }
                | FormError::DuplicateRuleSet(_)
                | FormError::DuplicateField(_)
        )
    }
}

impl From<std::io::Error> for FormError {
    fn from(err: std::io::Error) -> Self {
        FormError::FileError(err.to_string())
    }
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        FormError::ParseError(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for FormError {
    fn from(err: serde_yaml::Error) -> Self {
        FormError::ParseError(format!("YAML error: {}", err))
    }
}

impl From<toml::de::Error> for FormError {
    fn from(err: toml::de::Error) -> Self {
        FormError::ParseError(format!("TOML error: {}", err))
    }
}

/// Result type alias for form operations
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FormError::UnknownRuleSet {
            field: "email".to_string(),
            rule_set: "mail".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Field 'email' references undeclared rule set 'mail'"
        );

        let err = FormError::unknown_field("phone");
        assert_eq!(err.to_string(), "Unknown field: phone");
    }

    #[test]
    fn test_is_config_error() {
        assert!(FormError::DuplicateField("email".to_string()).is_config_error());
        assert!(FormError::DuplicateRule {
            rule_set: "password".to_string(),
            rule: "digit".to_string(),
        }
        .is_config_error());
        assert!(!FormError::unknown_field("x").is_config_error());
        assert!(!FormError::parse_error("bad").is_config_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: FormError = io.into();
        assert!(matches!(err, FormError::FileError(_)));
    }
}
