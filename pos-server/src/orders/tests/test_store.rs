use super::*;

#[test]
fn get_unknown_order_fails() {
    let fx = fixture();

    assert_eq!(
        fx.store.get("missing").unwrap_err(),
        OrderError::OrderNotFound("missing".to_string())
    );
}

#[test]
fn duplicate_id_is_rejected() {
    let fx = fixture();
    let order = place_order(&fx, &[("item1", 1)]);

    let result = fx.store.insert(order);

    assert!(matches!(result, Err(OrderError::Validation(_))));
    assert_eq!(fx.store.len(), 1);
}

#[test]
fn insert_without_items_is_rejected() {
    let fx = fixture();
    let mut order = place_order(&fx, &[("item1", 1)]);
    order.id = "empty".to_string();
    order.order_items.clear();

    assert!(matches!(
        fx.store.insert(order),
        Err(OrderError::Validation(_))
    ));
}

#[test]
fn insert_recomputes_total_from_items() {
    let fx = fixture();
    let mut order = place_order(&fx, &[("item7", 2)]); // Iced Tea 2.99 x 2
    order.id = "tampered".to_string();
    order.total = dec(1); // caller-supplied total is ignored

    let stored = fx.store.insert(order).unwrap();

    assert_eq!(stored.total, dec(598));
}

#[test]
fn list_preserves_creation_order() {
    let fx = fixture();
    let a = place_order(&fx, &[("item1", 1)]);
    let b = place_order(&fx, &[("item2", 1)]);
    let c = place_order(&fx, &[("item3", 1)]);

    let ids: Vec<String> = fx.store.list(|_| true).into_iter().map(|o| o.id).collect();

    assert_eq!(ids, vec![a.id, b.id, c.id]);
}

#[test]
fn list_applies_filter() {
    let fx = fixture();
    let a = place_order(&fx, &[("item1", 1)]);
    let b = place_order(&fx, &[("item2", 1)]);
    transition(&fx.store, &fx.tables, &b.id, OrderStatus::InProgress).unwrap();

    let placed = fx.store.list(|o| o.status == OrderStatus::Placed);

    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].id, a.id);
}

#[test]
fn mutate_failure_leaves_order_untouched() {
    let fx = fixture();
    let order = place_order(&fx, &[("item1", 1)]);

    let result = fx.store.mutate(&order.id, |draft| {
        draft.status = OrderStatus::Cancelled;
        Err(OrderError::Validation("abort".to_string()))
    });

    assert!(result.is_err());
    let stored = fx.store.get(&order.id).unwrap();
    assert_eq!(stored.status, OrderStatus::Placed);
    assert_eq!(stored.updated_at, order.updated_at);
}

#[test]
fn mutate_recomputes_total_and_bumps_updated_at() {
    let fx = fixture();
    let order = place_order(&fx, &[("item1", 1)]);

    let updated = fx
        .store
        .mutate(&order.id, |draft| {
            for item in &mut draft.order_items {
                item.quantity = 2;
                item.line_total = money::line_total(item.unit_price, item.quantity);
            }
            Ok(())
        })
        .unwrap();

    assert_eq!(updated.total, dec(2998));
    assert!(updated.updated_at >= order.updated_at);
}

#[test]
fn update_keeps_id_and_recomputes_total() {
    let fx = fixture();
    let order = place_order(&fx, &[("item1", 1)]);

    let mut replacement = order.clone();
    replacement.id = "other-id".to_string();
    replacement.total = dec(1);

    let stored = fx.store.update(&order.id, replacement).unwrap();

    assert_eq!(stored.id, order.id);
    assert_eq!(stored.total, dec(1499));
}
