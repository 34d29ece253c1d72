//! Error types for field serialization

use std::path::PathBuf;
use thiserror::Error;

use crate::kind::FieldKind;

/// Result type for serializer operations
pub type Result<T> = std::result::Result<T, SerializerError>;

/// Errors that can occur while converting fields or managing serializers
#[derive(Debug, Error)]
pub enum SerializerError {
    /// A serializer was handed a field of a kind it was not built for
    #[error("type mismatch: serializer for '{expected}' cannot handle a '{found}' field")]
    TypeMismatch {
        expected: FieldKind,
        found: FieldKind,
    },

    /// Stored text could not be parsed into the field's value
    #[error("invalid {kind} value '{input}': {reason}")]
    Format {
        kind: FieldKind,
        input: String,
        reason: String,
    },

    /// No serializer is registered for the kind
    #[error("no serializer registered for field kind '{kind}'")]
    NotRegistered { kind: FieldKind },

    /// Configuration could not be extracted
    #[error("failed to load serializer configuration: {source}")]
    Config { source: Box<figment::Error> },

    /// Configuration file does not exist
    #[error("configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file extension is not toml, yaml, yml or json
    #[error("unsupported configuration file format: {path}")]
    UnsupportedConfigFormat { path: PathBuf },

    /// Configured date pattern is not a valid strftime format
    #[error("invalid date format '{format}'")]
    InvalidDateFormat { format: String },
}

impl SerializerError {
    pub(crate) fn type_mismatch(expected: FieldKind, found: FieldKind) -> Self {
        SerializerError::TypeMismatch { expected, found }
    }

    pub(crate) fn format(kind: FieldKind, input: &str, reason: impl ToString) -> Self {
        SerializerError::Format {
            kind,
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<figment::Error> for SerializerError {
    fn from(error: figment::Error) -> Self {
        SerializerError::Config {
            source: Box::new(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_display() {
        let err = SerializerError::type_mismatch(FieldKind::Date, FieldKind::String);
        assert_eq!(
            err.to_string(),
            "type mismatch: serializer for 'date' cannot handle a 'string' field"
        );
    }

    #[test]
    fn test_format_error_display() {
        let err = SerializerError::format(FieldKind::Number, "abc", "invalid digit found in string");
        assert!(err.to_string().contains("number"));
        assert!(err.to_string().contains("'abc'"));
        assert!(err.to_string().contains("invalid digit"));
    }

    #[test]
    fn test_not_registered_display_for_select() {
        let err = SerializerError::NotRegistered {
            kind: FieldKind::Select("Color"),
        };
        assert_eq!(
            err.to_string(),
            "no serializer registered for field kind 'select:Color'"
        );
    }
}
