//! Order lifecycle and transaction core
//!
//! - **builder**: prices a cart and persists the order atomically
//! - **store**: in-memory order store, serialized read-modify-write
//! - **status**: the lifecycle state machine
//! - **settlement**: payment validation, change computation
//! - **tables**: table registry + occupancy coordination
//! - **money**: Decimal helpers
//!
//! # Data flow
//!
//! ```text
//! CreateOrderRequest -> builder -> store -> status / settlement
//!                                     |
//!                                     v
//!                         table occupancy coordinator
//! ```

pub mod builder;
pub mod error;
pub mod money;
pub mod settlement;
pub mod status;
pub mod store;
pub mod tables;

#[cfg(test)]
mod tests;

// Re-exports
pub use builder::build_order;
pub use error::{OrderError, OrderResult};
pub use settlement::{Settlement, settle};
pub use status::transition;
pub use store::OrderStore;
pub use tables::TableRegistry;
