//! In-memory Order Store
//!
//! Single authority for order identity. Orders are held in creation
//! order; line items are the source of truth for money, so the store
//! recomputes `total` from them on every write instead of trusting a
//! caller-supplied value.
//!
//! All mutations funnel through [`OrderStore::mutate`], which holds the
//! write lock across the whole read-modify-write cycle. Two concurrent
//! transitions on the same order therefore always see each other's
//! result, never stale state.

use std::collections::HashMap;

use parking_lot::RwLock;
use shared::models::Order;
use shared::util::now_millis;

use super::error::{OrderError, OrderResult};
use super::money;

#[derive(Default)]
struct StoreInner {
    orders: HashMap<String, Order>,
    /// Creation order for scans
    insertion: Vec<String>,
}

/// Shared, lock-protected order store
pub struct OrderStore {
    inner: RwLock<StoreInner>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner::default()),
        }
    }

    /// Persist a freshly built order. Fails if the order has no line
    /// items or the id already exists; on failure nothing is stored.
    pub fn insert(&self, mut order: Order) -> OrderResult<Order> {
        if order.order_items.is_empty() {
            return Err(OrderError::Validation(
                "order must contain at least one item".to_string(),
            ));
        }

        let mut inner = self.inner.write();
        if inner.orders.contains_key(&order.id) {
            return Err(OrderError::Validation(format!(
                "duplicate order id: {}",
                order.id
            )));
        }

        order.total = money::order_total(&order.order_items);
        inner.insertion.push(order.id.clone());
        inner.orders.insert(order.id.clone(), order.clone());
        Ok(order)
    }

    /// Fetch one order by id.
    pub fn get(&self, id: &str) -> OrderResult<Order> {
        self.inner
            .read()
            .orders
            .get(id)
            .cloned()
            .ok_or_else(|| OrderError::OrderNotFound(id.to_string()))
    }

    /// Scan orders in creation order, keeping those matching `filter`.
    pub fn list<F>(&self, filter: F) -> Vec<Order>
    where
        F: Fn(&Order) -> bool,
    {
        let inner = self.inner.read();
        inner
            .insertion
            .iter()
            .filter_map(|id| inner.orders.get(id))
            .filter(|o| filter(o))
            .cloned()
            .collect()
    }

    /// Full replace-on-update. The stored order keeps its id; `total` is
    /// recomputed from the items and `updated_at` is bumped.
    pub fn update(&self, id: &str, mut order: Order) -> OrderResult<Order> {
        let mut inner = self.inner.write();
        let existing = inner
            .orders
            .get(id)
            .ok_or_else(|| OrderError::OrderNotFound(id.to_string()))?;

        order.id = id.to_string();
        normalize(&mut order, existing.updated_at);
        inner.orders.insert(id.to_string(), order.clone());
        Ok(order)
    }

    /// Locked read-modify-write: `f` runs on a draft under the write
    /// lock; if it errors the stored order is untouched, otherwise the
    /// draft is normalized (total recomputed, `updated_at` bumped) and
    /// stored.
    pub fn mutate<F>(&self, id: &str, f: F) -> OrderResult<Order>
    where
        F: FnOnce(&mut Order) -> OrderResult<()>,
    {
        let mut inner = self.inner.write();
        let existing = inner
            .orders
            .get(id)
            .ok_or_else(|| OrderError::OrderNotFound(id.to_string()))?;

        let mut draft = existing.clone();
        f(&mut draft)?;
        normalize(&mut draft, existing.updated_at);
        inner.orders.insert(id.to_string(), draft.clone());
        Ok(draft)
    }

    pub fn len(&self) -> usize {
        self.inner.read().orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Items are the source of truth: recompute the total and bump
/// `updated_at` without ever letting it go backwards.
fn normalize(order: &mut Order, previous_updated_at: i64) {
    order.total = money::order_total(&order.order_items);
    order.updated_at = now_millis().max(previous_updated_at);
}
