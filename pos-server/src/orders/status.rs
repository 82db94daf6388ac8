//! Order status machine
//!
//! Validates and applies lifecycle transitions. The legal edge set lives
//! on [`OrderStatus::can_transition_to`]; this module applies it through
//! the store's locked read-modify-write and notifies the table
//! coordinator when an order concludes.

use shared::models::{Order, OrderStatus};

use super::error::{OrderError, OrderResult};
use super::store::OrderStore;
use super::tables::TableRegistry;

/// Transition an order to `new_status`.
///
/// Illegal edges fail with `IllegalTransition` naming both states and
/// leave the order untouched. Reaching `Completed` or `Cancelled` may
/// release the order's table.
pub fn transition(
    store: &OrderStore,
    tables: &TableRegistry,
    order_id: &str,
    new_status: OrderStatus,
) -> OrderResult<Order> {
    let mut old_status = None;
    let order = store.mutate(order_id, |order| {
        if !order.status.can_transition_to(new_status) {
            return Err(OrderError::IllegalTransition {
                from: order.status,
                to: new_status,
            });
        }
        old_status = Some(order.status);
        order.status = new_status;
        Ok(())
    })?;

    if let Some(old_status) = old_status {
        tables.on_order_status_changed(store, &order, old_status, new_status)?;
        tracing::info!(
            order_id = %order.id,
            from = %old_status,
            to = %new_status,
            "order status changed"
        );
    }
    Ok(order)
}
