//! Roster Server - employee record management API
//!
//! # Module structure
//!
//! ```text
//! roster-server/src/
//! ├── core/          # Configuration, state, server lifecycle
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Record store adapter, models, repositories
//! └── utils/         # Error types, logging
//! ```
//!
//! The binary wires these together in `main.rs`: load configuration from the
//! environment, connect to the record store once, then serve HTTP until
//! shutdown.

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{AppError, AppResult};

// Re-export logger setup
pub use crate::utils::logger::init_logger;
