//! Home page: the restaurant listing.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::IntoResponse;

use crate::catalog::Restaurant;
use crate::middleware::OptionalAuth;
use crate::routes::MessageQuery;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub restaurants: Vec<Restaurant>,
    pub user: Option<String>,
    pub error: Option<String>,
    pub success: Option<String>,
    pub info: Option<String>,
}

/// Display the restaurant listing.
pub async fn index(
    State(state): State<AppState>,
    OptionalAuth(current): OptionalAuth,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    IndexTemplate {
        restaurants: state.catalog().restaurants().to_vec(),
        user: current.map(|u| u.email.to_string()),
        error: query.error,
        success: query.success,
        info: query.info,
    }
}
