//! Menu categories endpoint (read-only)

use axum::{Json, Router, extract::State, routing::get};
use shared::models::Category;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/categories", get(list))
}

/// GET /api/categories - all menu categories
async fn list(State(state): State<ServerState>) -> Json<Vec<Category>> {
    Json(state.catalog.categories().to_vec())
}
