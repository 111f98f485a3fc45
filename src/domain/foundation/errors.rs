//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' is duplicated: {value}")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a duplicate value validation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    SubmissionNotFound,

    // Boundary errors
    SiteDataUnavailable,
    StorageError,
    SerializationError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::SubmissionNotFound => "SUBMISSION_NOT_FOUND",
            ErrorCode::SiteDataUnavailable => "SITE_DATA_UNAVAILABLE",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::SerializationError => "SERIALIZATION_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::Duplicate { field, .. } => field.clone(),
        };
        DomainError::validation(field, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("label");
        assert_eq!(format!("{}", err), "Field 'label' cannot be empty");
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("label", "contains separator");
        assert_eq!(
            format!("{}", err),
            "Field 'label' has invalid format: contains separator"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::SubmissionNotFound, "Submission not found");
        assert_eq!(format!("{}", err), "[SUBMISSION_NOT_FOUND] Submission not found");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::StorageError, "Write failed")
            .with_detail("path", "/tmp/x.json")
            .with_detail("reason", "permission denied");

        assert_eq!(err.details.get("path"), Some(&"/tmp/x.json".to_string()));
        assert_eq!(err.details.get("reason"), Some(&"permission denied".to_string()));
    }

    #[test]
    fn domain_error_from_validation_error_keeps_field() {
        let err: DomainError = ValidationError::duplicate("column", "transit_dist").into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field"), Some(&"column".to_string()));
    }

    #[test]
    fn error_codes_display_in_screaming_case() {
        let codes = [
            (ErrorCode::ValidationFailed, "VALIDATION_FAILED"),
            (ErrorCode::SubmissionNotFound, "SUBMISSION_NOT_FOUND"),
            (ErrorCode::SiteDataUnavailable, "SITE_DATA_UNAVAILABLE"),
            (ErrorCode::StorageError, "STORAGE_ERROR"),
            (ErrorCode::SerializationError, "SERIALIZATION_ERROR"),
        ];
        for (code, expected) in codes {
            assert_eq!(code.to_string(), expected);
        }
    }
}
