use super::*;
use crate::catalog::Catalog;
use rust_decimal::Decimal;
use shared::models::{
    CreateOrderRequest, Order, OrderItemRequest, OrderStatus, PaymentMethod, TableStatus,
};

/// Money constructor: cents to Decimal
fn dec(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

struct Fixture {
    catalog: Catalog,
    store: OrderStore,
    tables: TableRegistry,
}

fn fixture() -> Fixture {
    Fixture {
        catalog: Catalog::with_demo_menu(),
        store: OrderStore::new(),
        tables: TableRegistry::with_demo_tables(),
    }
}

/// Build a cart request from (menu_item_id, quantity) pairs
fn cart(entries: &[(&str, i32)]) -> CreateOrderRequest {
    CreateOrderRequest {
        items: entries
            .iter()
            .map(|(id, quantity)| OrderItemRequest {
                menu_item_id: id.to_string(),
                quantity: *quantity,
                notes: None,
            })
            .collect(),
        table_id: None,
        customer_id: None,
    }
}

fn cart_at_table(entries: &[(&str, i32)], table_id: &str) -> CreateOrderRequest {
    CreateOrderRequest {
        table_id: Some(table_id.to_string()),
        ..cart(entries)
    }
}

/// Build and persist an order, asserting success
fn place_order(fx: &Fixture, entries: &[(&str, i32)]) -> Order {
    build_order(&fx.catalog, &fx.store, &fx.tables, cart(entries)).unwrap()
}

fn place_order_at(fx: &Fixture, entries: &[(&str, i32)], table_id: &str) -> Order {
    build_order(
        &fx.catalog,
        &fx.store,
        &fx.tables,
        cart_at_table(entries, table_id),
    )
    .unwrap()
}

/// Walk an order along legal edges until it carries `status`
fn order_with_status(fx: &Fixture, status: OrderStatus) -> Order {
    let order = place_order(fx, &[("item1", 1)]);
    match status {
        OrderStatus::Placed => order,
        OrderStatus::InProgress => {
            transition(&fx.store, &fx.tables, &order.id, OrderStatus::InProgress).unwrap()
        }
        OrderStatus::Completed => {
            transition(&fx.store, &fx.tables, &order.id, OrderStatus::InProgress).unwrap();
            transition(&fx.store, &fx.tables, &order.id, OrderStatus::Completed).unwrap()
        }
        OrderStatus::Cancelled => {
            transition(&fx.store, &fx.tables, &order.id, OrderStatus::Cancelled).unwrap()
        }
        OrderStatus::Reserved => {
            transition(&fx.store, &fx.tables, &order.id, OrderStatus::Reserved).unwrap()
        }
    }
}

fn table_status(fx: &Fixture, id: &str) -> TableStatus {
    fx.tables.get(id).unwrap().status
}

fn cash_settle(fx: &Fixture, order_id: &str, tendered_cents: i64) -> OrderResult<Settlement> {
    settle(
        &fx.store,
        &fx.tables,
        order_id,
        PaymentMethod::Cash,
        Some(dec(tendered_cents)),
    )
}

mod test_flows;
mod test_store;
