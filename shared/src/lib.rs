//! Shared types for the POS backend
//!
//! Domain models and wire payloads used by the server and any future
//! client crates: menu catalog entities, dining tables, and the order
//! aggregate with its lifecycle enums.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
