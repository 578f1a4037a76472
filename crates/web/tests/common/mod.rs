//! Shared harness for end-to-end router tests.
//!
//! Drives the full application (session layer included) through
//! `tower::ServiceExt::oneshot`, carrying the session cookie between
//! requests by hand.

#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use secrecy::SecretString;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use tasty_web::config::TastyConfig;
use tasty_web::state::AppState;

/// Build the application against a fresh in-memory database.
///
/// The state handle is returned alongside the router so tests can
/// inspect the ledger and pool directly.
pub async fn test_app() -> (Router, AppState) {
    let config = TastyConfig {
        database_url: SecretString::from("sqlite::memory:"),
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        session_secret: SecretString::from("aB3xY9mK2nL5pQ7rT0uW4zC6eF8hJ1dG"),
        google: None,
        sentry_dsn: None,
    };

    // One connection only: each `:memory:` connection is its own database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    tasty_web::db::init_schema(&pool).await.unwrap();

    let state = AppState::new(config, pool);
    (tasty_web::app(state.clone()), state)
}

/// Send a GET request, optionally with a session cookie.
pub async fn get(app: &Router, path: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder.body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Send a url-encoded form POST, optionally with a session cookie.
pub async fn post_form(
    app: &Router,
    path: &str,
    form: &str,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder.body(Body::from(form.to_string())).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Extract the session cookie pair from a response, if one was set.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

/// The `Location` header of a redirect response.
pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Read the full response body as a string.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Sign up a user and return the authenticated session cookie.
pub async fn signed_up_session(app: &Router, username: &str, email: &str, password: &str) -> String {
    let form = format!("username={username}&email={email}&password={password}");
    let response = post_form(app, "/signup", &form, None).await;
    assert!(
        response.status().is_redirection(),
        "signup did not redirect: {}",
        response.status()
    );
    session_cookie(&response).expect("signup set no session cookie")
}
