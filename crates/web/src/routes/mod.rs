//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Restaurant listing (home)
//! GET  /restaurant/{id}         - Restaurant menu
//!
//! # Orders
//! POST /order                   - Place an order
//! GET  /orders                  - Order history for the current user
//!
//! # Auth
//! GET  /signup                  - Signup page
//! POST /signup                  - Signup action
//! GET  /login                   - Login page
//! POST /login                   - Login action
//! GET  /logout                  - Logout action
//!
//! # Google OAuth
//! GET  /login/google            - Redirect to Google consent screen
//! GET  /login/google/authorized - OAuth callback
//! ```
//!
//! Handlers communicate outcomes to the next page via `error`,
//! `success`, and `info` query parameters, rendered as one-shot notice
//! banners by the base template.

pub mod auth;
pub mod google_auth;
pub mod home;
pub mod orders;
pub mod restaurants;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use serde::Deserialize;

use crate::state::AppState;

/// Query parameters for the notice banners.
#[derive(Debug, Default, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
    pub info: Option<String>,
}

/// Redirect to `path` carrying a url-encoded notice parameter.
///
/// `kind` is one of `error`, `success`, or `info`.
fn redirect_with_notice(path: &str, kind: &str, message: &str) -> Redirect {
    let sep = if path.contains('?') { '&' } else { '?' };
    Redirect::to(&format!("{path}{sep}{kind}={}", urlencoding::encode(message)))
}

/// Create all routes for the application.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Browse
        .route("/", get(home::index))
        .route("/restaurant/{id}", get(restaurants::show))
        // Orders
        .route("/order", post(orders::place))
        .route("/orders", get(orders::index))
        // Auth
        .route("/signup", get(auth::signup_page).post(auth::signup))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        // Google OAuth
        .route("/login/google", get(google_auth::login))
        .route("/login/google/authorized", get(google_auth::callback))
}
