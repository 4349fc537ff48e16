//! # Workflow Error Types
//!
//! Error types for workflow operations.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Failures Reach the Caller                        │
//! │                                                                         │
//! │  Validation failure        → Ok(false) / descriptive message           │
//! │  Collaborator absence      → Ok("Shipping unavailable ...")            │
//! │  Collaborator failure      → Ok(OrderResult { success: false, .. })    │
//! │  Collaborator fault        → Err(WorkflowError::Collaborator(..))      │
//! │  Configuration problem     → Err(WorkflowError::InvalidConfig(..))     │
//! │                                                                         │
//! │  Only faults and configuration problems are errors. Collaborator       │
//! │  faults pass through untouched: no translation, no default value.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for workflow operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Result type alias for collaborator (port) calls.
pub type CollaboratorResult<T> = Result<T, CollaboratorError>;

// =============================================================================
// Collaborator Error
// =============================================================================

/// A collaborator could not answer.
///
/// Returned by port implementations. Every variant names the collaborator so
/// a propagated fault still says where it came from.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CollaboratorError {
    /// The backing service could not be reached.
    #[error("{collaborator} unavailable: {message}")]
    Unavailable {
        collaborator: String,
        message: String,
    },

    /// The backing service refused the request (unknown currency, bad recipient).
    #[error("{collaborator} rejected the request: {message}")]
    Rejected {
        collaborator: String,
        message: String,
    },

    /// The backing service did not answer in time.
    #[error("{collaborator} timed out after {secs} seconds")]
    Timeout { collaborator: String, secs: u64 },

    /// Anything else that went wrong inside the adapter.
    #[error("{collaborator} internal error: {message}")]
    Internal {
        collaborator: String,
        message: String,
    },
}

impl CollaboratorError {
    pub fn unavailable(collaborator: impl Into<String>, message: impl Into<String>) -> Self {
        CollaboratorError::Unavailable {
            collaborator: collaborator.into(),
            message: message.into(),
        }
    }

    pub fn rejected(collaborator: impl Into<String>, message: impl Into<String>) -> Self {
        CollaboratorError::Rejected {
            collaborator: collaborator.into(),
            message: message.into(),
        }
    }

    pub fn timeout(collaborator: impl Into<String>, secs: u64) -> Self {
        CollaboratorError::Timeout {
            collaborator: collaborator.into(),
            secs,
        }
    }

    pub fn internal(collaborator: impl Into<String>, message: impl Into<String>) -> Self {
        CollaboratorError::Internal {
            collaborator: collaborator.into(),
            message: message.into(),
        }
    }

    /// Name of the collaborator that faulted.
    pub fn collaborator(&self) -> &str {
        match self {
            CollaboratorError::Unavailable { collaborator, .. }
            | CollaboratorError::Rejected { collaborator, .. }
            | CollaboratorError::Timeout { collaborator, .. }
            | CollaboratorError::Internal { collaborator, .. } => collaborator,
        }
    }

    /// Returns true if a host could reasonably try the same call again.
    ///
    /// The workflow itself never retries; this is for hosts that do.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CollaboratorError::Unavailable { .. } | CollaboratorError::Timeout { .. }
        )
    }
}

// =============================================================================
// Workflow Error
// =============================================================================

/// Workflow error type covering everything an operation can fail with.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// A collaborator faulted; passed through unchanged.
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    /// Invalid storefront configuration.
    #[error("Invalid storefront configuration: {0}")]
    InvalidConfig(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),
}

impl WorkflowError {
    /// The collaborator fault behind this error, if that is what it is.
    pub fn as_collaborator(&self) -> Option<&CollaboratorError> {
        match self {
            WorkflowError::Collaborator(err) => Some(err),
            _ => None,
        }
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            WorkflowError::InvalidConfig(_)
                | WorkflowError::ConfigLoadFailed(_)
                | WorkflowError::ConfigSaveFailed(_)
        )
    }
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<std::io::Error> for WorkflowError {
    fn from(err: std::io::Error) -> Self {
        WorkflowError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for WorkflowError {
    fn from(err: toml::de::Error) -> Self {
        WorkflowError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for WorkflowError {
    fn from(err: toml::ser::Error) -> Self {
        WorkflowError::ConfigSaveFailed(err.to_string())
    }
}
