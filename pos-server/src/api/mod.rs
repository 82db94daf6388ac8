//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`categories`] - read-only category listing
//! - [`menu_items`] - read-only catalog surface
//! - [`orders`] - order creation, lookup, status/payment patching
//! - [`tables`] - table lookup and manager overrides

pub mod categories;
pub mod health;
pub mod menu_items;
pub mod orders;
pub mod tables;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Assemble the application router.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(categories::router())
        .merge(menu_items::router())
        .merge(orders::router())
        .merge(tables::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
