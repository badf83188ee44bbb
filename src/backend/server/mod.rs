//! Server setup and configuration
//!
//! - **`config`** - environment-driven configuration and database pool
//! - **`state`** - shared application state for Axum handlers
//! - **`init`** - application construction (state + router)

pub mod config;
pub mod init;
pub mod state;

pub use init::create_app;
pub use state::AppState;
