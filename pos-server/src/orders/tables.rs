//! Table registry and occupancy coordination
//!
//! Tables carry a weak reference model: an order stores `table_id`, the
//! table keeps no order collection, so "orders at table X" is a store
//! scan. The coordinator derives `Available`/`Occupied` from order
//! activity; manual staff overrides (including `Reserved`) are
//! authoritative and never fought.

use dashmap::DashMap;
use shared::models::{DiningTable, DiningTableUpdate, Order, OrderStatus, TableStatus};

use super::error::{OrderError, OrderResult};
use super::store::OrderStore;

/// Shared dining table registry
pub struct TableRegistry {
    tables: DashMap<String, DiningTable>,
    /// Display order for listings
    order: Vec<String>,
}

impl TableRegistry {
    pub fn new(tables: Vec<DiningTable>) -> Self {
        let order = tables.iter().map(|t| t.id.clone()).collect();
        let tables = tables.into_iter().map(|t| (t.id.clone(), t)).collect();
        Self { tables, order }
    }

    /// The demo floor plan shipped with the POS.
    pub fn with_demo_tables() -> Self {
        let capacities = [2, 4, 6, 2, 4, 8];
        let tables = capacities
            .iter()
            .enumerate()
            .map(|(i, &capacity)| DiningTable {
                id: format!("table{}", i + 1),
                name: format!("Table {}", i + 1),
                capacity,
                status: TableStatus::Available,
            })
            .collect();
        Self::new(tables)
    }

    pub fn get(&self, id: &str) -> OrderResult<DiningTable> {
        self.tables
            .get(id)
            .map(|t| t.clone())
            .ok_or_else(|| OrderError::TableNotFound(id.to_string()))
    }

    /// All tables in floor-plan order.
    pub fn list(&self) -> Vec<DiningTable> {
        self.order
            .iter()
            .filter_map(|id| self.tables.get(id).map(|t| t.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Direct manager override (PATCH tables/{id}); bypasses occupancy
    /// derivation entirely.
    pub fn apply_update(&self, id: &str, update: DiningTableUpdate) -> OrderResult<DiningTable> {
        if let Some(capacity) = update.capacity
            && capacity < 1
        {
            return Err(OrderError::Validation(format!(
                "capacity must be positive, got {}",
                capacity
            )));
        }

        let mut table = self
            .tables
            .get_mut(id)
            .ok_or_else(|| OrderError::TableNotFound(id.to_string()))?;

        if let Some(status) = update.status {
            table.status = status;
        }
        if let Some(name) = update.name {
            table.name = name;
        }
        if let Some(capacity) = update.capacity {
            table.capacity = capacity;
        }
        Ok(table.clone())
    }

    /// A new order was persisted. An `Available` table becomes
    /// `Occupied`; a manually `Reserved` or already `Occupied` table is
    /// left alone.
    pub fn on_order_created(&self, order: &Order) -> OrderResult<()> {
        let Some(table_id) = &order.table_id else {
            return Ok(());
        };

        let mut table = self
            .tables
            .get_mut(table_id)
            .ok_or_else(|| OrderError::TableNotFound(table_id.to_string()))?;

        if table.status == TableStatus::Available {
            table.status = TableStatus::Occupied;
            tracing::info!(table_id = %table.id, order_id = %order.id, "table occupied");
        }
        Ok(())
    }

    /// An order reached a terminal status. If no other active order
    /// still references the table, an `Occupied` table reverts to
    /// `Available`. A `Reserved` table was set by staff and stays put.
    pub fn on_order_status_changed(
        &self,
        store: &OrderStore,
        order: &Order,
        _old_status: OrderStatus,
        new_status: OrderStatus,
    ) -> OrderResult<()> {
        if !new_status.is_terminal() {
            return Ok(());
        }
        let Some(table_id) = &order.table_id else {
            return Ok(());
        };

        let still_active = !store
            .list(|o| {
                o.id != order.id
                    && o.table_id.as_deref() == Some(table_id.as_str())
                    && !o.status.is_terminal()
            })
            .is_empty();
        if still_active {
            return Ok(());
        }

        let mut table = self
            .tables
            .get_mut(table_id)
            .ok_or_else(|| OrderError::TableNotFound(table_id.to_string()))?;

        if table.status == TableStatus::Occupied {
            table.status = TableStatus::Available;
            tracing::info!(table_id = %table.id, order_id = %order.id, "table released");
        }
        Ok(())
    }
}
