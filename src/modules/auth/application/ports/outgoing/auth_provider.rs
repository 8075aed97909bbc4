// src/modules/auth/application/ports/outgoing/auth_provider.rs

use async_trait::async_trait;

use crate::modules::auth::application::domain::Session;

/// Rejection kinds the login form distinguishes. Everything else the
/// collaborator can produce collapses into `Other`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SignInError {
    #[error("No account exists for this email")]
    UserNotFound,

    #[error("Wrong password")]
    WrongPassword,

    #[error("Malformed email address")]
    InvalidEmail,

    #[error("Sign-in failed: {0}")]
    Other(String),
}

/// Boundary to the hosted authentication service. Credential checking
/// and account management live entirely on the provider side; this port
/// only exchanges credentials for a [`Session`].
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, SignInError>;
}
