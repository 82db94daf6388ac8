//! POS Server - restaurant point-of-sale backend
//!
//! # Module structure
//!
//! ```text
//! pos-server/src/
//! ├── core/      # Config, state, HTTP server
//! ├── catalog/   # Read-only menu catalog
//! ├── orders/    # Order lifecycle and transaction core
//! ├── api/       # HTTP routes and handlers
//! └── utils/     # Error envelope, logging
//! ```
//!
//! The `orders` module is the heart of the system: it owns order
//! creation, the status machine, payment settlement, and table
//! occupancy. Everything else is glue around it.

pub mod api;
pub mod catalog;
pub mod core;
pub mod orders;
pub mod utils;

// Re-export public types
pub use catalog::Catalog;
pub use core::{Config, Server, ServerState};
pub use orders::{OrderError, OrderStore, TableRegistry};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger;
