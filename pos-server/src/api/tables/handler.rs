//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{DiningTable, DiningTableUpdate};

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/tables - all tables in floor-plan order
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DiningTable>>> {
    Ok(Json(state.tables.list()))
}

/// GET /api/tables/:id - single table
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DiningTable>> {
    let table = state.tables.get(&id)?;
    Ok(Json(table))
}

/// PATCH /api/tables/:id - direct manager override
///
/// Bypasses the occupancy coordinator; a manual status set here is
/// authoritative until order activity changes it again.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DiningTableUpdate>,
) -> AppResult<Json<DiningTable>> {
    let table = state.tables.apply_update(&id, payload)?;
    Ok(Json(table))
}
