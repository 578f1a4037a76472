//! Google OAuth route handlers.
//!
//! Handles the authorization-code flow:
//! - Login: redirects to Google's consent screen
//! - Callback: validates state, exchanges the code, stores the token
//!
//! The callback only stores the token; the identity middleware resolves
//! the account email on the next request.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use rand::Rng;
use serde::Deserialize;
use tower_sessions::Session;

use crate::models::session_keys;
use crate::routes::redirect_with_notice;
use crate::state::AppState;

/// Query parameters from the Google OAuth callback.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    /// Authorization code to exchange for a token.
    pub code: Option<String>,
    /// State parameter for CSRF protection.
    pub state: Option<String>,
    /// Error code if authorization failed.
    pub error: Option<String>,
}

/// Generate a cryptographically secure random string.
fn generate_random_string(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            // SAFETY: idx is always within bounds since random_range returns 0..CHARSET.len()
            char::from(*CHARSET.get(idx).expect("idx within bounds"))
        })
        .collect()
}

/// Initiate Google OAuth login.
///
/// Generates the CSRF state, stores it in the session, and redirects
/// to Google's consent screen.
///
/// # Route
///
/// `GET /login/google`
pub async fn login(State(state): State<AppState>, session: Session) -> Response {
    let Some(google) = state.google() else {
        return redirect_with_notice("/login", "error", "Google login is not configured.")
            .into_response();
    };

    let oauth_state = generate_random_string(32);

    if let Err(e) = session
        .insert(session_keys::GOOGLE_OAUTH_STATE, &oauth_state)
        .await
    {
        tracing::error!("Failed to store OAuth state in session: {}", e);
        return redirect_with_notice("/login", "error", "Google login failed.").into_response();
    }

    let redirect_uri = format!("{}/login/google/authorized", state.config().base_url);
    let auth_url = google.authorization_url(&redirect_uri, &oauth_state);

    axum::response::Redirect::to(&auth_url).into_response()
}

/// Handle the Google OAuth callback.
///
/// Validates the state parameter, exchanges the authorization code for
/// a token, and stores the token in the session.
///
/// # Route
///
/// `GET /login/google/authorized`
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CallbackQuery>,
) -> Response {
    let Some(google) = state.google() else {
        return redirect_with_notice("/login", "error", "Google login is not configured.")
            .into_response();
    };

    if let Some(error) = query.error {
        tracing::warn!("Google OAuth error: {}", error);
        return redirect_with_notice("/login", "error", "Google login failed.").into_response();
    }

    let Some(code) = query.code else {
        tracing::warn!("Google OAuth callback missing code");
        return redirect_with_notice("/login", "error", "Google login failed.").into_response();
    };

    // Verify state parameter (CSRF protection)
    let Some(returned_state) = query.state else {
        tracing::warn!("Google OAuth callback missing state");
        return redirect_with_notice("/login", "error", "Google login failed.").into_response();
    };

    let stored_state: Option<String> = session
        .get(session_keys::GOOGLE_OAUTH_STATE)
        .await
        .ok()
        .flatten();

    if stored_state.as_ref() != Some(&returned_state) {
        tracing::warn!("Google OAuth state mismatch");
        return redirect_with_notice("/login", "error", "Google login failed.").into_response();
    }

    // Clear the stored state (one-time use)
    let _ = session
        .remove::<String>(session_keys::GOOGLE_OAUTH_STATE)
        .await;

    // Redirect URI must match the one used in the authorization request
    let redirect_uri = format!("{}/login/google/authorized", state.config().base_url);

    let token = match google.exchange_code(&code, &redirect_uri).await {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("Failed to exchange Google OAuth code: {}", e);
            return redirect_with_notice("/login", "error", "Google login failed.")
                .into_response();
        }
    };

    if let Err(e) = session.insert(session_keys::GOOGLE_TOKEN, &token).await {
        tracing::error!("Failed to store Google token: {}", e);
        return redirect_with_notice("/login", "error", "Google login failed.").into_response();
    }

    tracing::info!("Google OAuth flow completed");

    axum::response::Redirect::to("/").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_string_length_and_charset() {
        let s = generate_random_string(32);
        assert_eq!(s.len(), 32);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_random_strings_differ() {
        assert_ne!(generate_random_string(32), generate_random_string(32));
    }
}
