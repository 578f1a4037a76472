//! Per-request identity resolution.
//!
//! Runs before every handler. If the session is anonymous but holds a
//! Google access token from an earlier OAuth callback, the user's email
//! is fetched from the userinfo endpoint and the session becomes
//! authenticated as a side effect of the request.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tower_sessions::Session;

use crate::models::{CurrentUser, session_keys};
use crate::services::google::{GoogleError, GoogleToken};
use crate::state::AppState;

/// Resolve the caller's identity before dispatching the request.
///
/// The enrichment is best-effort by design: a failed third-party
/// lookup must never interrupt the primary request, so the error is
/// logged at debug level and discarded here, at this single call site.
pub async fn resolve_identity(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Response {
    if let Err(e) = enrich_from_google(&state, &session).await {
        tracing::debug!("third-party identity lookup failed: {e}");
    }

    next.run(request).await
}

/// Errors the enrichment can hit. All of them are swallowed by the
/// caller above.
#[derive(Debug, thiserror::Error)]
enum EnrichError {
    #[error(transparent)]
    Google(#[from] GoogleError),
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

async fn enrich_from_google(state: &AppState, session: &Session) -> Result<(), EnrichError> {
    // Already authenticated: nothing to do.
    let current: Option<CurrentUser> = session.get(session_keys::CURRENT_USER).await?;
    if current.is_some() {
        return Ok(());
    }

    let Some(google) = state.google() else {
        return Ok(());
    };

    let Some(token) = session
        .get::<GoogleToken>(session_keys::GOOGLE_TOKEN)
        .await?
    else {
        return Ok(());
    };

    let email = google.fetch_email(&token.access_token).await?;
    crate::middleware::set_current_user(session, &CurrentUser { email }).await?;

    Ok(())
}
