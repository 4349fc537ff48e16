//! One-time code login.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::WorkflowResult;
use crate::ports::{EmailSender, SecurityCodeGenerator};

/// Issues login codes and emails them to the user.
pub struct AuthenticationService {
    codes: Arc<dyn SecurityCodeGenerator>,
    email: Arc<dyn EmailSender>,
}

impl AuthenticationService {
    pub fn new(codes: Arc<dyn SecurityCodeGenerator>, email: Arc<dyn EmailSender>) -> Self {
        AuthenticationService { codes, email }
    }

    /// Generates one code and sends its display form to `address`.
    ///
    /// If generation fails, no email is sent.
    pub async fn login(&self, address: &str) -> WorkflowResult<()> {
        debug!(email = %address, "Issuing login code");

        let code = self.codes.generate().await?;
        self.email.send(address, &code.to_string()).await?;

        info!(email = %address, "Login code delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollaboratorError;
    use crate::testing::{RecordingEmail, SequenceCodes};

    #[tokio::test]
    async fn test_login_emails_generated_code() {
        let email = Arc::new(RecordingEmail::new());
        let service = AuthenticationService::new(Arc::new(SequenceCodes::new([123])), email.clone());

        service.login("user@example.com").await.unwrap();

        assert_eq!(
            email.sent().await,
            vec![("user@example.com".to_string(), "123".to_string())]
        );
    }

    #[tokio::test]
    async fn test_each_login_uses_a_fresh_code() {
        let email = Arc::new(RecordingEmail::new());
        let service =
            AuthenticationService::new(Arc::new(SequenceCodes::new([111_111, 222_222])), email.clone());

        service.login("a@example.com").await.unwrap();
        service.login("b@example.com").await.unwrap();

        let bodies: Vec<String> = email.sent().await.into_iter().map(|(_, body)| body).collect();
        assert_eq!(bodies, vec!["111111", "222222"]);
    }

    #[tokio::test]
    async fn test_generator_fault_sends_nothing() {
        let fault = CollaboratorError::internal("security-code", "entropy unavailable");
        let email = Arc::new(RecordingEmail::new());
        let service =
            AuthenticationService::new(Arc::new(SequenceCodes::failing(fault.clone())), email.clone());

        let err = service.login("user@example.com").await.unwrap_err();

        assert_eq!(err.as_collaborator(), Some(&fault));
        assert!(email.sent().await.is_empty());
    }

    #[tokio::test]
    async fn test_email_fault_propagates() {
        let fault = CollaboratorError::unavailable("email", "smtp down");
        let email = Arc::new(RecordingEmail::failing(fault.clone()));
        let service = AuthenticationService::new(Arc::new(SequenceCodes::new([42])), email.clone());

        let err = service.login("user@example.com").await.unwrap_err();

        assert_eq!(err.as_collaborator(), Some(&fault));
        assert_eq!(email.sent().await[0].1, "42");
    }
}
