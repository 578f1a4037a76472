//! Google OAuth 2.0 client.
//!
//! Drives the three-legged authorization-code flow: build the consent
//! URL, exchange the callback code for an access token, and look up the
//! account email from the userinfo endpoint.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use tasty_core::{Email, EmailError};

use crate::config::GoogleOAuthConfig;

const AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/auth";
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

const SCOPES: &str = "openid email profile";

/// Errors from talking to Google.
#[derive(Debug, Error)]
pub enum GoogleError {
    /// Network or HTTP-level failure.
    #[error("google request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The userinfo response had no email field.
    #[error("google userinfo response had no email")]
    MissingEmail,

    /// The email Google returned did not parse.
    #[error("google returned an invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Token response from the exchange endpoint.
///
/// Stored in the session verbatim so later requests can resolve the
/// account without redoing the flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub id_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserInfo {
    #[serde(default)]
    email: Option<String>,
}

/// Client for Google's OAuth endpoints.
#[derive(Clone)]
pub struct GoogleClient {
    http: Client,
    client_id: String,
    client_secret: SecretString,
}

impl GoogleClient {
    #[must_use]
    pub fn new(config: &GoogleOAuthConfig) -> Self {
        Self {
            http: Client::new(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        }
    }

    /// Build the consent-screen URL the browser is redirected to.
    ///
    /// `state` is the per-flow CSRF nonce; the callback handler checks
    /// it against the copy held in the session.
    #[must_use]
    pub fn authorization_url(&self, redirect_uri: &str, state: &str) -> String {
        format!(
            "{AUTHORIZE_URL}?client_id={}&redirect_uri={}&response_type=code&scope={}&state={}",
            urlencoding::encode(&self.client_id),
            urlencoding::encode(redirect_uri),
            urlencoding::encode(SCOPES),
            urlencoding::encode(state),
        )
    }

    /// Exchange the authorization code from the callback for a token.
    ///
    /// # Errors
    ///
    /// Returns `GoogleError::Http` if the request fails or Google
    /// answers with a non-success status.
    pub async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<GoogleToken, GoogleError> {
        let params = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.expose_secret()),
            ("code", code),
            ("redirect_uri", redirect_uri),
            ("grant_type", "authorization_code"),
        ];

        let token = self
            .http
            .post(TOKEN_URL)
            .form(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<GoogleToken>()
            .await?;

        Ok(token)
    }

    /// Look up the account email for an access token.
    ///
    /// # Errors
    ///
    /// Returns `GoogleError::MissingEmail` if the profile carries no
    /// email (the token was issued without the email scope, say).
    pub async fn fetch_email(&self, access_token: &str) -> Result<Email, GoogleError> {
        let info = self
            .http
            .get(USERINFO_URL)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<UserInfo>()
            .await?;

        let raw = info.email.ok_or(GoogleError::MissingEmail)?;
        Ok(Email::parse(&raw)?)
    }
}
