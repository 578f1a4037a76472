//! Restaurant menu page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;

use tasty_core::RestaurantId;

use crate::catalog::Restaurant;
use crate::error::AppError;
use crate::middleware::OptionalAuth;
use crate::routes::MessageQuery;
use crate::state::AppState;

/// Restaurant menu template.
#[derive(Template, WebTemplate)]
#[template(path = "restaurant.html")]
pub struct RestaurantTemplate {
    pub restaurant: Restaurant,
    pub user: Option<String>,
    pub error: Option<String>,
    pub success: Option<String>,
    pub info: Option<String>,
}

/// Display a restaurant's menu.
///
/// Unknown IDs get a plain 404 rather than a redirect, so a bad link
/// is visible as such.
pub async fn show(
    State(state): State<AppState>,
    OptionalAuth(current): OptionalAuth,
    Path(id): Path<i64>,
    Query(query): Query<MessageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = state
        .catalog()
        .restaurant(RestaurantId::new(id))
        .ok_or_else(|| AppError::NotFound("Restaurant not found".to_string()))?;

    Ok(RestaurantTemplate {
        restaurant: restaurant.clone(),
        user: current.map(|u| u.email.to_string()),
        error: query.error,
        success: query.success,
        info: query.info,
    })
}
