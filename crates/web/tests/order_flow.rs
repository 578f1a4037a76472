//! End-to-end tests for browsing and ordering.

#![allow(clippy::unwrap_used)]

mod common;

use axum::http::StatusCode;

use common::{body_string, get, location, post_form, signed_up_session, test_app};

#[tokio::test]
async fn health_endpoints_respond() {
    let (app, _state) = test_app().await;

    let response = get(&app, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");

    let response = get(&app, "/health/ready", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn home_lists_restaurants() {
    let (app, _state) = test_app().await;

    let response = get(&app, "/", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Pizza Palace"));
    assert!(body.contains("Burger Barn"));
}

#[tokio::test]
async fn restaurant_page_shows_menu_with_prices() {
    let (app, _state) = test_app().await;

    let response = get(&app, "/restaurant/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Margherita Pizza"));
    assert!(body.contains("$10.00"));
    assert!(body.contains("Pepperoni Pizza"));
    assert!(body.contains("$12.00"));
}

#[tokio::test]
async fn unknown_restaurant_is_404() {
    let (app, _state) = test_app().await;

    let response = get(&app, "/restaurant/99", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(response).await, "Restaurant not found");
}

#[tokio::test]
async fn anonymous_order_redirects_to_login_without_side_effect() {
    let (app, state) = test_app().await;

    let response = post_form(&app, "/order", "restaurant_id=1&item_id=1", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/login?error="));
    assert!(state.ledger().is_empty());
}

#[tokio::test]
async fn placing_an_order_records_it_and_lands_on_history() {
    let (app, state) = test_app().await;
    let cookie = signed_up_session(&app, "alice", "alice@x.com", "hunter22").await;

    let response = post_form(&app, "/order", "restaurant_id=1&item_id=1", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/orders?success="));

    assert_eq!(state.ledger().len(), 1);
    let orders = state.ledger().snapshot();
    assert_eq!(orders[0].restaurant, "Pizza Palace");
    assert_eq!(orders[0].item, "Margherita Pizza");

    let response = get(&app, "/orders", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Margherita Pizza"));
    assert!(body.contains("Pizza Palace"));
}

#[tokio::test]
async fn malformed_ids_redirect_home_with_error() {
    let (app, state) = test_app().await;
    let cookie = signed_up_session(&app, "bob", "bob@x.com", "hunter22").await;

    let response = post_form(&app, "/order", "restaurant_id=abc&item_id=1", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/?error="));

    // Missing fields behave the same as unparseable ones.
    let response = post_form(&app, "/order", "restaurant_id=1", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/?error="));

    assert!(state.ledger().is_empty());
}

#[tokio::test]
async fn unknown_item_redirects_back_to_the_menu() {
    let (app, state) = test_app().await;
    let cookie = signed_up_session(&app, "carol", "carol@x.com", "hunter22").await;

    let response = post_form(&app, "/order", "restaurant_id=1&item_id=99", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/restaurant/1?error="));
    assert!(state.ledger().is_empty());
}

#[tokio::test]
async fn order_history_is_scoped_to_the_user() {
    let (app, state) = test_app().await;

    let alice = signed_up_session(&app, "alice", "alice@x.com", "hunter22").await;
    let bob = signed_up_session(&app, "bob", "bob@x.com", "hunter22").await;

    post_form(&app, "/order", "restaurant_id=1&item_id=1", Some(&alice)).await;
    post_form(&app, "/order", "restaurant_id=2&item_id=1", Some(&bob)).await;

    assert_eq!(state.ledger().len(), 2);

    let body = body_string(get(&app, "/orders", Some(&alice)).await).await;
    assert!(body.contains("Margherita Pizza"));
    assert!(!body.contains("Classic Burger"));

    let body = body_string(get(&app, "/orders", Some(&bob)).await).await;
    assert!(body.contains("Classic Burger"));
    assert!(!body.contains("Margherita Pizza"));
}
