// src/modules/auth/adapter/outgoing/identity_rest.rs
//
// AuthProvider adapter for the Identity Toolkit REST surface
// (`accounts:signInWithPassword`).

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::modules::auth::application::domain::Session;
use crate::modules::auth::application::ports::outgoing::{AuthProvider, SignInError};

const SIGN_IN_URL: &str = "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword";

pub struct IdentityRestAuth {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl IdentityRestAuth {
    pub fn new(http: reqwest::Client, api_key: &str) -> Self {
        Self {
            http,
            api_key: api_key.to_string(),
            endpoint: SIGN_IN_URL.to_string(),
        }
    }

    /// Point the adapter at an arbitrary endpoint (local emulator).
    pub fn with_endpoint(http: reqwest::Client, api_key: &str, endpoint: &str) -> Self {
        Self {
            http,
            api_key: api_key.to_string(),
            endpoint: endpoint.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct SignInResponse {
    #[serde(rename = "localId")]
    local_id: String,
    email: String,
    #[serde(rename = "displayName")]
    display_name: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[async_trait]
impl AuthProvider for IdentityRestAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, SignInError> {
        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }))
            .send()
            .await
            .map_err(|e| SignInError::Other(e.to_string()))?;

        if response.status().is_success() {
            let body: SignInResponse = response
                .json()
                .await
                .map_err(|e| SignInError::Other(e.to_string()))?;
            let display_name = body.display_name.filter(|name| !name.is_empty());
            return Ok(Session {
                uid: body.local_id,
                email: body.email,
                display_name,
            });
        }

        let body: ErrorResponse = response
            .json()
            .await
            .map_err(|e| SignInError::Other(e.to_string()))?;
        Err(map_error_code(&body.error.message))
    }
}

/// Maps the provider's error codes onto the kinds the login form shows.
/// Codes may carry a suffix (`"INVALID_PASSWORD : ..."`), so match on the
/// leading token.
fn map_error_code(code: &str) -> SignInError {
    let token = code.split_whitespace().next().unwrap_or(code);
    match token {
        "EMAIL_NOT_FOUND" => SignInError::UserNotFound,
        "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => SignInError::WrongPassword,
        "INVALID_EMAIL" => SignInError::InvalidEmail,
        _ => SignInError::Other(code.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_unknown_account_code() {
        assert!(matches!(
            map_error_code("EMAIL_NOT_FOUND"),
            SignInError::UserNotFound
        ));
    }

    #[test]
    fn maps_wrong_password_codes() {
        assert!(matches!(
            map_error_code("INVALID_PASSWORD"),
            SignInError::WrongPassword
        ));
        assert!(matches!(
            map_error_code("INVALID_LOGIN_CREDENTIALS"),
            SignInError::WrongPassword
        ));
    }

    #[test]
    fn maps_malformed_email_code() {
        assert!(matches!(
            map_error_code("INVALID_EMAIL"),
            SignInError::InvalidEmail
        ));
    }

    #[test]
    fn maps_code_with_detail_suffix() {
        assert!(matches!(
            map_error_code("INVALID_PASSWORD : wrong."),
            SignInError::WrongPassword
        ));
    }

    #[test]
    fn unknown_code_becomes_other() {
        assert!(matches!(
            map_error_code("TOO_MANY_ATTEMPTS_TRY_LATER"),
            SignInError::Other(_)
        ));
    }
}
