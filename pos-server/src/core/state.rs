use std::sync::Arc;

use crate::catalog::Catalog;
use crate::core::Config;
use crate::orders::{OrderStore, TableRegistry};

/// Shared server state - holds singleton handles to every service
///
/// Cloning is cheap (Arc shallow copies); a clone is injected into every
/// request handler by axum.
///
/// | Field | Description |
/// |-------|-------------|
/// | config | immutable configuration |
/// | catalog | read-only menu catalog |
/// | orders | order store, single authority for order identity |
/// | tables | table registry + occupancy coordination |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    pub orders: Arc<OrderStore>,
    pub tables: Arc<TableRegistry>,
}

impl ServerState {
    /// Build the process-wide state. Constructed once at startup and
    /// injected into handlers.
    pub fn initialize(config: &Config) -> Self {
        let catalog = Arc::new(Catalog::with_demo_menu());
        let tables = Arc::new(TableRegistry::with_demo_tables());
        let orders = Arc::new(OrderStore::new());

        tracing::info!(
            menu_items = catalog.len(),
            tables = tables.len(),
            "server state initialized"
        );

        Self {
            config: config.clone(),
            catalog,
            orders,
            tables,
        }
    }
}
