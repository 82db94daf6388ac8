//! Payment settlement
//!
//! Records how an order was paid and, for cash, computes change due.
//! Settlement also concludes the lifecycle: a successful settlement
//! drives the order to `Completed` (Placed orders pass through
//! In Progress on the way). Card and mobile payments are assumed
//! authorized by the external terminal.

use rust_decimal::Decimal;
use shared::models::{Order, OrderStatus, PaymentMethod, PaymentRecord};
use shared::util::now_millis;

use super::error::{OrderError, OrderResult};
use super::money;
use super::store::OrderStore;
use super::tables::TableRegistry;

/// Outcome of a successful settlement
#[derive(Debug, Clone)]
pub struct Settlement {
    pub order: Order,
    /// Zero for non-cash methods
    pub change_due: Decimal,
}

/// Settle an order with `method`.
///
/// Cash requires `tendered >= total` and yields `tendered - total` in
/// change. Re-settling with the same method (and sufficient tender) is a
/// no-op returning the recorded change; a different method fails with
/// `AlreadySettled`. A `Cancelled` or `Reserved` order cannot be
/// settled. On any failure the order is left untouched.
pub fn settle(
    store: &OrderStore,
    tables: &TableRegistry,
    order_id: &str,
    method: PaymentMethod,
    tendered: Option<Decimal>,
) -> OrderResult<Settlement> {
    let mut change_due = Decimal::ZERO;
    let mut old_status = None;

    let order = store.mutate(order_id, |order| {
        if let Some(existing) = &order.payment {
            if existing.method != method {
                return Err(OrderError::AlreadySettled {
                    order_id: order.id.clone(),
                    method: existing.method,
                });
            }
            // Same method again: verify the tender would still cover the
            // bill, then report the recorded change.
            if method.requires_tender() {
                let tendered = require_tender(tendered)?;
                if tendered < existing.amount {
                    return Err(OrderError::InsufficientPayment {
                        total: existing.amount,
                        tendered,
                    });
                }
            }
            change_due = existing.change.unwrap_or(Decimal::ZERO);
            return Ok(());
        }

        // Not yet settled: the order must be able to conclude
        match order.status {
            OrderStatus::Placed | OrderStatus::InProgress | OrderStatus::Completed => {}
            other => {
                return Err(OrderError::IllegalTransition {
                    from: other,
                    to: OrderStatus::Completed,
                });
            }
        }

        let (tendered, change) = if method.requires_tender() {
            let tendered = money::round_money(require_tender(tendered)?);
            if tendered < order.total {
                return Err(OrderError::InsufficientPayment {
                    total: order.total,
                    tendered,
                });
            }
            (Some(tendered), Some(tendered - order.total))
        } else {
            (None, None)
        };

        change_due = change.unwrap_or(Decimal::ZERO);
        order.payment_method = method;
        order.payment = Some(PaymentRecord {
            method,
            amount: order.total,
            tendered,
            change,
            paid_at: now_millis(),
        });

        // Conclude the lifecycle; Placed passes through In Progress
        if order.status != OrderStatus::Completed {
            old_status = Some(order.status);
            if order.status == OrderStatus::Placed {
                order.status = OrderStatus::InProgress;
            }
            order.status = OrderStatus::Completed;
        }
        Ok(())
    })?;

    if let Some(old_status) = old_status {
        tables.on_order_status_changed(store, &order, old_status, OrderStatus::Completed)?;
        tracing::info!(
            order_id = %order.id,
            method = %method,
            total = %order.total,
            change = %change_due,
            "order settled"
        );
    }

    Ok(Settlement { order, change_due })
}

fn require_tender(tendered: Option<Decimal>) -> OrderResult<Decimal> {
    tendered.ok_or_else(|| {
        OrderError::Validation("amountTendered is required for cash settlement".to_string())
    })
}
