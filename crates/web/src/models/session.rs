//! Session-related types.
//!
//! Types stored in the session for authentication state. A session is
//! either anonymous (no `CurrentUser` stored) or authenticated.

use serde::{Deserialize, Serialize};

use tasty_core::Email;

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's email address.
    pub email: Email,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for Google OAuth state (CSRF protection).
    pub const GOOGLE_OAUTH_STATE: &str = "google_oauth_state";

    /// Key for the Google access token obtained via OAuth.
    pub const GOOGLE_TOKEN: &str = "google_token";
}
