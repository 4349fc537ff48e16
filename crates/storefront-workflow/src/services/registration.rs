//! Account sign-up.

use std::sync::Arc;

use storefront_core::validation::validate_email;
use tracing::{debug, info, warn};

use crate::error::WorkflowResult;
use crate::ports::EmailSender;

/// Validates sign-ups and sends the welcome email.
pub struct UserRegistrationService {
    email: Arc<dyn EmailSender>,
    welcome_message: String,
}

impl UserRegistrationService {
    pub fn new(email: Arc<dyn EmailSender>, welcome_message: impl Into<String>) -> Self {
        UserRegistrationService {
            email,
            welcome_message: welcome_message.into(),
        }
    }

    /// Registers `address`.
    ///
    /// Returns `Ok(false)` without sending anything when the address is
    /// malformed. Otherwise the welcome email is sent, and awaited, before
    /// `Ok(true)` is returned.
    pub async fn register(&self, address: &str) -> WorkflowResult<bool> {
        debug!(email = %address, "Registering user");

        if let Err(e) = validate_email(address) {
            warn!(email = %address, error = %e, "Registration rejected");
            return Ok(false);
        }

        self.email.send(address, &self.welcome_message).await?;

        info!(email = %address, "User registered");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollaboratorError;
    use crate::testing::RecordingEmail;

    fn service(email: Arc<RecordingEmail>) -> UserRegistrationService {
        UserRegistrationService::new(email, "Welcome aboard!")
    }

    #[tokio::test]
    async fn test_invalid_email_sends_nothing() {
        let email = Arc::new(RecordingEmail::new());
        let service = service(email.clone());

        for address in ["a", "", "@domain.com", "user@", "a@b@c"] {
            assert!(!service.register(address).await.unwrap(), "{}", address);
        }

        assert!(email.sent().await.is_empty());
    }

    #[tokio::test]
    async fn test_valid_email_gets_welcome() {
        let email = Arc::new(RecordingEmail::new());
        let service = service(email.clone());

        assert!(service.register("1234@domain.com").await.unwrap());

        let sent = email.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "1234@domain.com");
        assert!(sent[0].1.to_lowercase().contains("welcome"));
    }

    #[tokio::test]
    async fn test_email_fault_propagates() {
        let fault = CollaboratorError::rejected("email", "mailbox full");
        let email = Arc::new(RecordingEmail::failing(fault.clone()));
        let service = service(email.clone());

        let err = service.register("1234@domain.com").await.unwrap_err();

        assert_eq!(err.as_collaborator(), Some(&fault));
        assert_eq!(email.sent().await.len(), 1);
    }
}
