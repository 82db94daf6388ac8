//! Order Builder
//!
//! Turns a cart of (menu item, quantity, notes) tuples into a priced,
//! persisted order. Validation happens before anything is stored, so a
//! failed build never leaves a partial order behind.

use shared::models::{CreateOrderRequest, Order, OrderItem, OrderStatus, PaymentMethod};
use shared::util::{new_id, now_millis};

use super::error::{OrderError, OrderResult};
use super::money::{self, MAX_QUANTITY};
use super::store::OrderStore;
use super::tables::TableRegistry;
use crate::catalog::Catalog;

/// Build and persist a new order.
///
/// Fails with `Validation` on an empty cart or non-positive quantity,
/// `MenuItemNotFound` on an unknown menu item, and `TableNotFound` when
/// the requested table does not exist. A table-assignment failure
/// invalidates the whole creation rather than degrading to an
/// unassigned order.
pub fn build_order(
    catalog: &Catalog,
    store: &OrderStore,
    tables: &TableRegistry,
    req: CreateOrderRequest,
) -> OrderResult<Order> {
    if req.items.is_empty() {
        return Err(OrderError::Validation(
            "items must be a non-empty array".to_string(),
        ));
    }
    for item in &req.items {
        if item.quantity < 1 {
            return Err(OrderError::Validation(format!(
                "quantity must be positive, got {}",
                item.quantity
            )));
        }
        if item.quantity > MAX_QUANTITY {
            return Err(OrderError::Validation(format!(
                "quantity exceeds maximum allowed ({}), got {}",
                MAX_QUANTITY, item.quantity
            )));
        }
    }

    // Resolve the table up front: nothing may persist if it is unknown
    if let Some(table_id) = &req.table_id {
        tables.get(table_id)?;
    }

    let order_id = new_id();
    let now = now_millis();

    let mut order_items = Vec::with_capacity(req.items.len());
    for item in &req.items {
        let menu_item = catalog
            .menu_item(&item.menu_item_id)
            .ok_or_else(|| OrderError::MenuItemNotFound(item.menu_item_id.clone()))?;

        // Price snapshot: captured now, never re-read
        order_items.push(OrderItem {
            id: new_id(),
            order_id: order_id.clone(),
            menu_item_id: menu_item.id.clone(),
            menu_item_name: menu_item.name.clone(),
            quantity: item.quantity,
            unit_price: menu_item.price,
            line_total: money::line_total(menu_item.price, item.quantity),
            notes: item.notes.clone(),
            created_at: now,
        });
    }

    let total = money::order_total(&order_items);
    let order = Order {
        id: order_id,
        status: OrderStatus::Placed,
        payment_method: PaymentMethod::Cash,
        total,
        table_id: req.table_id,
        customer_id: req.customer_id,
        payment: None,
        created_at: now,
        updated_at: now,
        order_items,
    };

    let order = store.insert(order)?;
    tables.on_order_created(&order)?;

    tracing::info!(
        order_id = %order.id,
        total = %order.total,
        items = order.order_items.len(),
        table_id = order.table_id.as_deref().unwrap_or("-"),
        "order created"
    );
    Ok(order)
}
