//! # Validation Module
//!
//! Input validation rules for the storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Outcomes                                │
//! │                                                                         │
//! │  is_* functions       → bool, for gates that only need yes/no          │
//! │  validate_* functions → ValidationResult, for callers that report why  │
//! │  validate_user_input  → every failing field at once (ValidationErrors) │
//! │                                                                         │
//! │  No function here panics on bad input; invalid input is a value.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{is_valid_email, validate_email};
//!
//! assert!(is_valid_email("1234@domain.com"));
//! assert!(validate_email("a").is_err());
//! ```

use crate::error::{ValidationError, ValidationErrors};
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Inclusive username length bounds for account handles.
pub const USERNAME_MIN_LEN: usize = 5;
pub const USERNAME_MAX_LEN: usize = 15;

/// Inclusive bounds used by [`validate_user_input`].
pub const PROFILE_NAME_MIN_LEN: usize = 3;
pub const PROFILE_NAME_MAX_LEN: usize = 255;
pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 100;

// =============================================================================
// Email
// =============================================================================

/// Validates an account email.
///
/// ## Rules
/// - Exactly one `@`
/// - Non-empty local part before it
/// - Non-empty domain after it
///
/// ## Sign-up Workflow
/// ```text
/// register("1234@domain.com")
///      │
///      ▼
/// validate_email ← THIS FUNCTION
///      │
///      ├── Err → register returns false, nothing is sent
///      │
///      └── Ok  → welcome email, register returns true
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let mut parts = email.split('@');
    let local = parts.next().unwrap_or_default();
    let domain = match parts.next() {
        Some(domain) => domain,
        None => {
            return Err(ValidationError::InvalidFormat {
                field: "email".to_string(),
                reason: "missing '@'".to_string(),
            })
        }
    };

    if parts.next().is_some() {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "more than one '@'".to_string(),
        });
    }

    if local.is_empty() {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "empty local part".to_string(),
        });
    }

    if domain.is_empty() {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "empty domain".to_string(),
        });
    }

    Ok(())
}

/// Boolean form of [`validate_email`].
pub fn is_valid_email(email: &str) -> bool {
    validate_email(email).is_ok()
}

// =============================================================================
// Username
// =============================================================================

/// Checks an account handle length, inclusive of both bounds.
///
/// ```rust
/// use storefront_core::validation::is_valid_username;
///
/// assert!(is_valid_username("aaaaa"));
/// assert!(!is_valid_username("aaaa"));
/// ```
pub fn is_valid_username(username: &str) -> bool {
    let len = username.chars().count();
    (USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len)
}

// =============================================================================
// Price
// =============================================================================

/// Checks `min <= price <= max`.
pub fn is_price_in_range(price: Money, min: Money, max: Money) -> bool {
    price >= min && price <= max
}

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// User Input
// =============================================================================

/// Validates a profile name and age together, reporting every failure.
///
/// ## Rules
/// - username: 3 to 255 characters after trimming
/// - age: 18 to 100 inclusive
///
/// ```rust
/// use storefront_core::validation::validate_user_input;
///
/// assert!(validate_user_input("mosh", 20).is_ok());
///
/// let err = validate_user_input("", 0).unwrap_err();
/// assert_eq!(err.to_string(), "Invalid username, Invalid age");
/// ```
pub fn validate_user_input(username: &str, age: u32) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name_len = username.trim().chars().count();
    if name_len < PROFILE_NAME_MIN_LEN {
        errors.push(ValidationError::TooShort {
            field: "username".to_string(),
            min: PROFILE_NAME_MIN_LEN,
        });
    } else if name_len > PROFILE_NAME_MAX_LEN {
        errors.push(ValidationError::TooLong {
            field: "username".to_string(),
            max: PROFILE_NAME_MAX_LEN,
        });
    }

    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        errors.push(ValidationError::OutOfRange {
            field: "age".to_string(),
            min: MIN_AGE as i64,
            max: MAX_AGE as i64,
        });
    }

    errors.into_result()
}

// =============================================================================
// Unit Tests
// =============================================================================
