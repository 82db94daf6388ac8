//! Domain models
//!
//! One file per entity, payload structs next to the entity they create
//! or patch.

pub mod category;
pub mod dining_table;
pub mod menu_item;
pub mod order;

pub use category::Category;
pub use dining_table::{DiningTable, DiningTableUpdate, TableStatus};
pub use menu_item::MenuItem;
pub use order::{
    CreateOrderRequest, Order, OrderItem, OrderItemRequest, OrderPatch, OrderStatus,
    PaymentMethod, PaymentRecord,
};
