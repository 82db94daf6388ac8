//! Order Model
//!
//! The order aggregate and its lifecycle enums. An order owns its line
//! items exclusively; `total` is always derived from the lines (items are
//! the source of truth, the stored field is a cache the store recomputes
//! on every write).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order lifecycle status
///
/// Wire format uses the display strings (`"In Progress"` with a space)
/// so existing POS clients keep working unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Placed,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
    Reserved,
}

impl OrderStatus {
    /// Whether the status machine permits moving from `self` to `next`.
    ///
    /// Legal edges:
    /// - Placed -> In Progress | Cancelled | Reserved
    /// - In Progress -> Completed | Cancelled
    ///
    /// Everything else (including self-loops) is illegal.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Placed, InProgress)
                | (Placed, Cancelled)
                | (Placed, Reserved)
                | (InProgress, Completed)
                | (InProgress, Cancelled)
        )
    }

    /// Completed and Cancelled orders are finished; any other status still
    /// counts as active for table occupancy.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Placed => "Placed",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Reserved => "Reserved",
        };
        f.write_str(s)
    }
}

/// Payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    Cash,
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Mobile Payment")]
    MobilePayment,
}

impl PaymentMethod {
    /// Cash settlements require an amount tendered and produce change.
    pub fn requires_tender(self) -> bool {
        matches!(self, PaymentMethod::Cash)
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::MobilePayment => "Mobile Payment",
        };
        f.write_str(s)
    }
}

/// One line within an order
///
/// Created only as part of order creation and owned exclusively by its
/// order. `unit_price` is the menu price snapshot captured at build time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub order_id: String,
    pub menu_item_id: String,
    /// Name snapshot for receipts and kitchen slips
    pub menu_item_name: String,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    /// unit_price * quantity, rounded to 2 decimal places
    #[serde(with = "rust_decimal::serde::float")]
    pub line_total: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: i64,
}

/// Payment record written by settlement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub method: PaymentMethod,
    /// Order total at the time of settlement
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Cash tendered by the customer (cash only)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub tendered: Option<Decimal>,
    /// Change due back (cash only, never negative)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub change: Option<Decimal>,
    pub paid_at: i64,
}

/// Order aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    /// Sum of all line totals; recomputed by the store on every write
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<PaymentRecord>,
    pub created_at: i64,
    /// Non-decreasing, bumped on every mutation
    pub updated_at: i64,
    /// Insertion order, non-empty after creation
    pub order_items: Vec<OrderItem>,
}

impl Order {
    pub fn is_settled(&self) -> bool {
        self.payment.is_some()
    }
}

/// One requested line when creating an order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub menu_item_id: String,
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Vec<OrderItemRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

/// Patch order payload (status transition and/or settlement)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPatch {
    pub status: Option<OrderStatus>,
    pub payment_method: Option<PaymentMethod>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub amount_tendered: Option<Decimal>,
}
