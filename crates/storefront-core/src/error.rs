//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError         - General domain errors                         │
//! │  ├── ValidationError   - A single input validation failure             │
//! │  └── ValidationErrors  - Every failure found in one input              │
//! │                                                                         │
//! │  storefront-workflow errors (separate crate)                           │
//! │  ├── CollaboratorError - A collaborator faulted                        │
//! │  └── WorkflowError     - What a workflow operation returns             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation failures are values, not faults: the workflow layer turns them
//! into `false` or a descriptive message and never panics on bad input.

use std::fmt;

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// `pop` or `peek` on an empty [`Stack`](crate::stack::Stack).
    #[error("Stack is empty")]
    EmptyStack,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. an email without a domain).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Name of the field that failed.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Validation Errors (aggregate)
// =============================================================================

/// Every validation failure found while checking one input.
///
/// Displays as a comma-separated summary, one `Invalid <field>` entry per
/// failing field, e.g. `Invalid username, Invalid age`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// `Ok(())` when nothing was collected, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("Invalid {}", e.field()))
            .collect();
        write!(f, "{}", summary.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CoreError::EmptyStack.to_string(), "Stack is empty");
        assert_eq!(
            CoreError::Validation(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: i64::MAX,
            })
            .to_string(),
            format!("Validation error: price must be between 0 and {}", i64::MAX)
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::TooShort {
            field: "username".to_string(),
            min: 3,
        };
        assert_eq!(err.to_string(), "username must be at least 3 characters");
        assert_eq!(err.field(), "username");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "email".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_validation_errors_summary() {
        let mut errors = ValidationErrors::new();
        assert!(errors.clone().into_result().is_ok());

        errors.push(ValidationError::TooShort {
            field: "username".to_string(),
            min: 3,
        });
        errors.push(ValidationError::OutOfRange {
            field: "age".to_string(),
            min: 18,
            max: 100,
        });

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.to_string(), "Invalid username, Invalid age");
        assert!(errors.into_result().is_err());
    }
}
