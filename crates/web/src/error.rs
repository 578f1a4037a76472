//! Application error handling.
//!
//! `AppError` is the handler-level error: anything a route returns as
//! `Err` is converted into an HTTP response here. Unexpected failures
//! (database, internal) are reported to Sentry and logged before the
//! client sees a generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;

/// Top-level application errors returned from route handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database/repository failure.
    #[error("database error: {0}")]
    Database(#[from] RepositoryError),

    /// Authentication failure that was not handled at the route layer.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Resource not found. The message is rendered to the client.
    #[error("{0}")]
    NotFound(String),

    /// Malformed request. The message is rendered to the client.
    #[error("{0}")]
    BadRequest(String),

    /// Anything else that should read as a server fault.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Session-store failures surface as internal errors.
    #[must_use]
    pub fn session(e: &tower_sessions::session::Error) -> Self {
        Self::Internal(format!("session error: {e}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Database(_) | Self::Auth(_) | Self::Internal(_) => {
                sentry::capture_error(&self);
                tracing::error!("request failed: {self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, body).into_response()
    }
}
