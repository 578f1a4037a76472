//! Order placement and order history.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::ledger::Order;
use crate::middleware::OptionalAuth;
use crate::routes::{MessageQuery, redirect_with_notice};
use crate::services::orders::{OrderError, place_order};
use crate::state::AppState;

/// Order form data.
///
/// IDs arrive as strings; missing fields default to empty and fail
/// validation the same way unparseable ones do.
#[derive(Debug, Deserialize)]
pub struct OrderForm {
    #[serde(default)]
    pub restaurant_id: String,
    #[serde(default)]
    pub item_id: String,
}

/// Order history template.
#[derive(Template, WebTemplate)]
#[template(path = "orders.html")]
pub struct OrdersTemplate {
    pub orders: Vec<Order>,
    pub user: Option<String>,
    pub error: Option<String>,
    pub success: Option<String>,
    pub info: Option<String>,
}

/// Handle order form submission.
///
/// Every outcome is a redirect: failures carry an error notice to the
/// page where the user can retry, success lands on the order history.
pub async fn place(
    State(state): State<AppState>,
    OptionalAuth(current): OptionalAuth,
    Form(form): Form<OrderForm>,
) -> Response {
    let identity = current.map(|u| u.email);

    match place_order(
        state.catalog(),
        state.ledger(),
        identity.as_ref(),
        &form.restaurant_id,
        &form.item_id,
    ) {
        Ok(order) => redirect_with_notice(
            "/orders",
            "success",
            &format!("Order placed: {} from {}", order.item, order.restaurant),
        )
        .into_response(),
        Err(OrderError::Unauthenticated) => {
            redirect_with_notice("/login", "error", "Please log in to place an order.")
                .into_response()
        }
        Err(OrderError::InvalidInput) => {
            redirect_with_notice("/", "error", "Invalid order data.").into_response()
        }
        Err(OrderError::RestaurantNotFound) => {
            redirect_with_notice("/", "error", "Restaurant not found.").into_response()
        }
        Err(OrderError::ItemNotFound { restaurant_id }) => redirect_with_notice(
            &format!("/restaurant/{restaurant_id}"),
            "error",
            "Menu item not found.",
        )
        .into_response(),
    }
}

/// Display the order history for the current user.
pub async fn index(
    State(state): State<AppState>,
    OptionalAuth(current): OptionalAuth,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    let identity = current.map(|u| u.email);

    OrdersTemplate {
        orders: state.ledger().for_user(identity.as_ref()),
        user: identity.map(|e| e.to_string()),
        error: query.error,
        success: query.success,
        info: query.info,
    }
}
