//! Authentication route handlers.
//!
//! Signup and login against the local identity store, plus logout.
//! Google OAuth lives in [`super::google_auth`].

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::AppError;
use crate::middleware::{OptionalAuth, clear_current_user, set_current_user};
use crate::models::{CurrentUser, session_keys};
use crate::routes::{MessageQuery, redirect_with_notice};
use crate::services::auth::{AuthError, AuthService};
use crate::services::google::GoogleToken;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Signup form data.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Signup page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/signup.html")]
pub struct SignupTemplate {
    pub user: Option<String>,
    pub error: Option<String>,
    pub success: Option<String>,
    pub info: Option<String>,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub google_enabled: bool,
    pub user: Option<String>,
    pub error: Option<String>,
    pub success: Option<String>,
    pub info: Option<String>,
}

// =============================================================================
// Signup Routes
// =============================================================================

/// Display the signup page.
pub async fn signup_page(
    OptionalAuth(current): OptionalAuth,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    SignupTemplate {
        user: current.map(|u| u.email.to_string()),
        error: query.error,
        success: query.success,
        info: query.info,
    }
}

/// Handle signup form submission.
///
/// Validation failures re-render the form in place; a duplicate email
/// sends the user to the login page instead, since they already have
/// an account.
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SignupForm>,
) -> Result<Response, AppError> {
    let username = form.username.trim();
    let email = form.email.trim();

    if username.is_empty() || email.is_empty() || form.password.trim().is_empty() {
        return Ok(signup_error_page("Please fill all fields.").into_response());
    }

    let auth = AuthService::new(state.pool());
    let user = match auth.signup(username, email, &form.password).await {
        Ok(user) => user,
        Err(AuthError::InvalidEmail(_)) => {
            return Ok(signup_error_page("Please enter a valid email address.").into_response());
        }
        Err(AuthError::AlreadyRegistered) => {
            return Ok(redirect_with_notice(
                "/login",
                "error",
                "Email already registered. Please log in.",
            )
            .into_response());
        }
        Err(e) => return Err(e.into()),
    };

    set_current_user(&session, &CurrentUser { email: user.email })
        .await
        .map_err(|e| AppError::session(&e))?;

    tracing::info!(user_id = %user.id, "new user signed up");

    Ok(
        redirect_with_notice("/", "success", "Signup successful! You are now logged in.")
            .into_response(),
    )
}

fn signup_error_page(message: &str) -> SignupTemplate {
    SignupTemplate {
        user: None,
        error: Some(message.to_string()),
        success: None,
        info: None,
    }
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
pub async fn login_page(
    State(state): State<AppState>,
    OptionalAuth(current): OptionalAuth,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    LoginTemplate {
        google_enabled: state.google().is_some(),
        user: current.map(|u| u.email.to_string()),
        error: query.error,
        success: query.success,
        info: query.info,
    }
}

/// Handle login form submission.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let auth = AuthService::new(state.pool());

    let user = match auth.login(form.email.trim(), &form.password).await {
        Ok(user) => user,
        Err(AuthError::InvalidCredentials) => {
            return Ok(redirect_with_notice(
                "/login",
                "error",
                "Invalid credentials. Please try again.",
            )
            .into_response());
        }
        Err(e) => return Err(e.into()),
    };

    set_current_user(&session, &CurrentUser { email: user.email })
        .await
        .map_err(|e| AppError::session(&e))?;

    tracing::info!(user_id = %user.id, "user logged in");

    Ok(redirect_with_notice("/", "success", "Logged in successfully.").into_response())
}

// =============================================================================
// Logout
// =============================================================================

/// Log the current user out.
///
/// Clears both the local identity and any stored Google token, so a
/// logged-out session is not silently re-authenticated by the token on
/// the next request. Safe to hit while already logged out.
pub async fn logout(session: Session) -> Result<Response, AppError> {
    clear_current_user(&session)
        .await
        .map_err(|e| AppError::session(&e))?;
    session
        .remove::<GoogleToken>(session_keys::GOOGLE_TOKEN)
        .await
        .map_err(|e| AppError::session(&e))?;

    Ok(redirect_with_notice("/", "info", "You have been logged out.").into_response())
}
