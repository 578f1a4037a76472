//! End-to-end tests for signup, login, and logout.

#![allow(clippy::unwrap_used)]

mod common;

use axum::http::StatusCode;

use common::{body_string, get, location, post_form, session_cookie, signed_up_session, test_app};
use tasty_web::db::users::UserRepository;

#[tokio::test]
async fn signup_logs_the_user_in() {
    let (app, state) = test_app().await;

    let response = post_form(
        &app,
        "/signup",
        "username=alice&email=alice%40x.com&password=hunter22",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/?success="));

    let cookie = session_cookie(&response).unwrap();
    let body = body_string(get(&app, "/", Some(&cookie)).await).await;
    assert!(body.contains("alice@x.com"));
    assert!(body.contains("Log out"));

    assert_eq!(UserRepository::new(state.pool()).count().await.unwrap(), 1);
}

#[tokio::test]
async fn blank_fields_re_render_the_signup_form() {
    let (app, state) = test_app().await;

    let response = post_form(&app, "/signup", "username=&email=a%40x.com&password=pw", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Please fill all fields."));

    assert_eq!(UserRepository::new(state.pool()).count().await.unwrap(), 0);
}

#[tokio::test]
async fn duplicate_signup_is_sent_to_login() {
    let (app, state) = test_app().await;
    signed_up_session(&app, "first", "dup@x.com", "pw-one").await;

    let response = post_form(
        &app,
        "/signup",
        "username=second&email=dup%40x.com&password=pw-two",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/login?error="));

    // The store gained exactly one user.
    assert_eq!(UserRepository::new(state.pool()).count().await.unwrap(), 1);
}

#[tokio::test]
async fn login_round_trip() {
    let (app, _state) = test_app().await;
    signed_up_session(&app, "alice", "alice@x.com", "hunter22").await;

    // Fresh browser, correct password.
    let response = post_form(
        &app,
        "/login",
        "email=alice%40x.com&password=hunter22",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/?success="));
    let cookie = session_cookie(&response).unwrap();

    let body = body_string(get(&app, "/", Some(&cookie)).await).await;
    assert!(body.contains("alice@x.com"));
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let (app, _state) = test_app().await;
    signed_up_session(&app, "alice", "alice@x.com", "hunter22").await;

    let response = post_form(&app, "/login", "email=alice%40x.com&password=nope", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/login?error="));
    assert!(session_cookie(&response).is_none());
}

#[tokio::test]
async fn unknown_email_gets_the_same_rejection() {
    let (app, _state) = test_app().await;

    let response = post_form(&app, "/login", "email=ghost%40x.com&password=pw", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/login?error="));
}

#[tokio::test]
async fn logout_clears_the_identity_and_is_idempotent() {
    let (app, _state) = test_app().await;
    let cookie = signed_up_session(&app, "alice", "alice@x.com", "hunter22").await;

    let response = get(&app, "/logout", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/?info="));

    let body = body_string(get(&app, "/", Some(&cookie)).await).await;
    assert!(!body.contains("alice@x.com"));
    assert!(body.contains("Log in"));

    // A second logout on the same (now anonymous) session still works.
    let response = get(&app, "/logout", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn google_login_is_disabled_without_credentials() {
    let (app, _state) = test_app().await;

    // The login page offers no Google link.
    let body = body_string(get(&app, "/login", None).await).await;
    assert!(!body.contains("/login/google"));

    // Hitting the route directly redirects back with an error notice.
    let response = get(&app, "/login/google", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/login?error="));
}

#[tokio::test]
async fn notice_banner_renders_from_query_parameters() {
    let (app, _state) = test_app().await;

    let body = body_string(get(&app, "/login?error=Invalid%20credentials.%20Please%20try%20again.", None).await).await;
    assert!(body.contains("Invalid credentials. Please try again."));
}
