//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu item entity
///
/// Read-only from the order core's perspective: the price is snapshotted
/// into each order line at build time and never re-read, so historical
/// orders are immune to later price changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Non-negative, two-decimal currency value
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: String,
    pub image_url: String,
    pub in_stock: bool,
    pub category_id: String,
    pub created_at: i64,
    pub updated_at: i64,
}
