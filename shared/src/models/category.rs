//! Category Model

use serde::{Deserialize, Serialize};

/// Menu category entity
///
/// Categories are maintained by menu management; the order core only
/// reads them through the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub active: bool,
    pub created_at: i64,
}
