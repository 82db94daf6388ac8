//! Order core error taxonomy

use rust_decimal::Decimal;
use shared::models::{OrderStatus, PaymentMethod};
use thiserror::Error;

use crate::utils::AppError;

/// Errors produced by the order lifecycle core
#[derive(Debug, Error, PartialEq)]
pub enum OrderError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("Illegal status transition: {from} -> {to}")]
    IllegalTransition { from: OrderStatus, to: OrderStatus },

    #[error("Insufficient payment: tendered {tendered} for total {total}")]
    InsufficientPayment { total: Decimal, tendered: Decimal },

    #[error("Order {order_id} already settled with {method}")]
    AlreadySettled {
        order_id: String,
        method: PaymentMethod,
    },
}

pub type OrderResult<T> = Result<T, OrderError>;

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Validation(msg) => AppError::Validation(msg),
            OrderError::MenuItemNotFound(_)
            | OrderError::OrderNotFound(_)
            | OrderError::TableNotFound(_) => AppError::NotFound(err.to_string()),
            OrderError::IllegalTransition { .. } | OrderError::InsufficientPayment { .. } => {
                AppError::BusinessRule(err.to_string())
            }
            OrderError::AlreadySettled { .. } => AppError::Conflict(err.to_string()),
        }
    }
}
