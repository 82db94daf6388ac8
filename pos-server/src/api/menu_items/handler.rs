//! Menu Item API Handlers
//!
//! Read-only: menu maintenance is owned by menu management, the order
//! core only consumes lookups.

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::MenuItem;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// GET /api/menu-items - list the catalog
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    Ok(Json(state.catalog.list()))
}

/// GET /api/menu-items/:id - single menu item
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    let item = state
        .catalog
        .menu_item(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Menu item not found: {}", id)))?;
    Ok(Json(item))
}
