//! Money arithmetic on rust_decimal
//!
//! All monetary calculation happens in `Decimal` and is rounded half-up
//! to 2 decimal places at the money boundary. Binary floats never enter
//! the computation, so repeated sums of values like 0.10 and 0.20 stay
//! exact.

use rust_decimal::{Decimal, RoundingStrategy};
use shared::models::OrderItem;

/// Monetary values carry 2 decimal places, rounded half-up
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed quantity per line
pub const MAX_QUANTITY: i32 = 9999;

/// Round to the monetary precision.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Line total: unit price times quantity.
pub fn line_total(unit_price: Decimal, quantity: i32) -> Decimal {
    round_money(unit_price * Decimal::from(quantity))
}

/// Order total: exact sum of all line totals.
pub fn order_total(items: &[OrderItem]) -> Decimal {
    round_money(items.iter().map(|i| i.line_total).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(unit_price: Decimal, quantity: i32) -> OrderItem {
        OrderItem {
            id: "li".into(),
            order_id: "o".into(),
            menu_item_id: "m".into(),
            menu_item_name: "Item".into(),
            quantity,
            unit_price,
            line_total: line_total(unit_price, quantity),
            notes: None,
            created_at: 0,
        }
    }

    #[test]
    fn line_total_is_exact() {
        assert_eq!(line_total(Decimal::new(1499, 2), 2), Decimal::new(2998, 2));
        assert_eq!(line_total(Decimal::new(10, 2), 3), Decimal::new(30, 2));
    }

    #[test]
    fn repeated_small_values_do_not_drift() {
        // 0.10 + 0.20 repeated 10x must be exactly 3.00
        let mut items = Vec::new();
        for _ in 0..10 {
            items.push(line(Decimal::new(10, 2), 1));
            items.push(line(Decimal::new(20, 2), 1));
        }
        assert_eq!(order_total(&items), Decimal::new(300, 2));
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_money(Decimal::new(12345, 4)), Decimal::new(123, 2)); // 1.2345 -> 1.23
        assert_eq!(round_money(Decimal::new(12350, 4)), Decimal::new(124, 2)); // 1.2350 -> 1.24
    }
}
