//! End-to-end lifecycle scenarios across builder, store, status machine,
//! settlement and table coordination.

use super::*;

#[test]
fn dine_in_service_from_seating_to_change() {
    let fx = fixture();

    // Party of two at table2: a carbonara and a pizza
    let order = place_order_at(&fx, &[("item1", 1), ("item2", 1)], "table2");
    assert_eq!(order.total, dec(2798));
    assert_eq!(order.status, OrderStatus::Placed);
    assert_eq!(table_status(&fx, "table2"), TableStatus::Occupied);

    // Kitchen picks it up
    let order = transition(&fx.store, &fx.tables, &order.id, OrderStatus::InProgress).unwrap();
    assert_eq!(order.status, OrderStatus::InProgress);
    assert_eq!(table_status(&fx, "table2"), TableStatus::Occupied);

    // Guest pays 30.00 in cash
    let settlement = cash_settle(&fx, &order.id, 3000).unwrap();
    assert_eq!(settlement.change_due, dec(202));
    assert_eq!(settlement.order.status, OrderStatus::Completed);
    assert_eq!(table_status(&fx, "table2"), TableStatus::Available);

    // The record survives as served
    let stored = fx.store.get(&order.id).unwrap();
    assert!(stored.is_settled());
    assert_eq!(stored.payment.unwrap().change, Some(dec(202)));
}

#[test]
fn takeaway_paid_by_card() {
    let fx = fixture();

    let order = place_order(&fx, &[("item4", 2), ("item7", 1)]); // 9.98 + 2.99

    let settlement = settle(
        &fx.store,
        &fx.tables,
        &order.id,
        PaymentMethod::CreditCard,
        None,
    )
    .unwrap();

    assert_eq!(settlement.order.total, dec(1297));
    assert_eq!(settlement.order.status, OrderStatus::Completed);
    assert!(
        fx.tables
            .list()
            .iter()
            .all(|t| t.status == TableStatus::Available)
    );
}

#[test]
fn cancelled_order_never_reaches_payment() {
    let fx = fixture();
    let order = place_order_at(&fx, &[("item6", 1)], "table1");

    transition(&fx.store, &fx.tables, &order.id, OrderStatus::Cancelled).unwrap();
    assert_eq!(table_status(&fx, "table1"), TableStatus::Available);

    let result = cash_settle(&fx, &order.id, 10_000);
    assert!(result.is_err());
    assert!(!fx.store.get(&order.id).unwrap().is_settled());
}

#[test]
fn two_parties_share_a_table_and_pay_separately() {
    let fx = fixture();
    let first = place_order_at(&fx, &[("item1", 1)], "table5");
    let second = place_order_at(&fx, &[("item2", 1)], "table5");

    cash_settle(&fx, &first.id, 1500).unwrap();
    assert_eq!(table_status(&fx, "table5"), TableStatus::Occupied);

    cash_settle(&fx, &second.id, 1300).unwrap();
    assert_eq!(table_status(&fx, "table5"), TableStatus::Available);
}

#[test]
fn listing_reflects_the_whole_day() {
    let fx = fixture();
    let a = place_order_at(&fx, &[("item1", 1)], "table1");
    let b = place_order(&fx, &[("item2", 1)]);
    let c = place_order_at(&fx, &[("item3", 1)], "table1");

    transition(&fx.store, &fx.tables, &b.id, OrderStatus::Cancelled).unwrap();
    cash_settle(&fx, &a.id, 1500).unwrap();

    let all = fx.store.list(|_| true);
    assert_eq!(all.len(), 3);

    let at_table1 = fx.store.list(|o| o.table_id.as_deref() == Some("table1"));
    assert_eq!(at_table1.len(), 2);

    let active = fx.store.list(|o| !o.status.is_terminal());
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, c.id);

    // c is still active at table1
    assert_eq!(table_status(&fx, "table1"), TableStatus::Occupied);
}
