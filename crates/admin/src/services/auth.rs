//! HTTP client for the external auth provider.
//!
//! The admin panel does not manage credentials itself; it exchanges them
//! with a hosted auth service (GoTrue-style API) and keeps only the issued
//! access token in the server-side session.

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Deserialize;
use thiserror::Error;

use crate::config::AuthProviderConfig;

/// Errors that can occur when talking to the auth provider.
#[derive(Debug, Error)]
pub enum AuthError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned an error response.
    #[error("auth provider error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Provider rejected the supplied credentials.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Failed to build the client or parse a response.
    #[error("parse error: {0}")]
    Parse(String),
}

/// A successful password sign-in.
#[derive(Debug, Clone, Deserialize)]
pub struct SignIn {
    /// Bearer token identifying the session with the provider.
    pub access_token: String,
    /// Seconds until `access_token` expires; bounds the local session.
    pub expires_in: Option<i64>,
}

/// Client for the external auth provider's HTTP API.
#[derive(Clone)]
pub struct AuthClient {
    client: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    /// Create a new auth provider client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &AuthProviderConfig) -> Result<Self, AuthError> {
        let mut headers = HeaderMap::new();

        headers.insert(
            "apikey",
            HeaderValue::from_str(config.api_key.expose_secret())
                .map_err(|e| AuthError::Parse(format!("invalid API key format: {e}")))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.clone(),
        })
    }

    /// Exchange an email/password pair for an access token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` on a 400/401 from the
    /// provider, `AuthError::Api` on any other error status.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SignIn, AuthError> {
        let url = format!("{}/token?grant_type=password", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        let status = response.status();

        if status == StatusCode::BAD_REQUEST || status == StatusCode::UNAUTHORIZED {
            return Err(AuthError::InvalidCredentials);
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AuthError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<SignIn>()
            .await
            .map_err(|e| AuthError::Parse(e.to_string()))
    }

    /// Invalidate the session identified by `access_token` with the provider.
    ///
    /// The provider revokes the token and clears its refresh chain; the
    /// caller is responsible for destroying the local session afterwards.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Api` if the provider reports an error status.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let url = format!("{}/logout", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(access_token)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AuthError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn test_config() -> AuthProviderConfig {
        AuthProviderConfig {
            url: "https://auth.mercata.dev/auth/v1".to_string(),
            api_key: SecretString::from("public-anon-key"),
        }
    }

    #[test]
    fn test_client_builds() {
        assert!(AuthClient::new(&test_config()).is_ok());
    }

    #[test]
    fn test_client_rejects_non_ascii_key() {
        let config = AuthProviderConfig {
            url: "https://auth.mercata.dev/auth/v1".to_string(),
            api_key: SecretString::from("clé"),
        };
        assert!(matches!(AuthClient::new(&config), Err(AuthError::Parse(_))));
    }

    #[test]
    fn test_signin_deserializes_provider_payload() {
        let signin: SignIn = serde_json::from_str(
            r#"{"access_token":"tok","token_type":"bearer","expires_in":3600}"#,
        )
        .expect("valid payload");
        assert_eq!(signin.access_token, "tok");
        assert_eq!(signin.expires_in, Some(3600));
    }

    #[test]
    fn test_error_display() {
        let err = AuthError::Api {
            status: 503,
            message: "upstream down".to_string(),
        };
        assert_eq!(err.to_string(), "auth provider error: 503 - upstream down");
        assert_eq!(AuthError::InvalidCredentials.to_string(), "invalid credentials");
    }
}
