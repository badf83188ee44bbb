//! Backend Module
//!
//! The REST backend for Fritter. Every resource follows the same shape:
//! a collection (`db.rs`) of thin async store operations, an ordered set
//! of request validators (`validators.rs`), a pure response builder
//! (`responses.rs`), and a flat route table with its handlers
//! (`handlers.rs`).
//!
//! Control flow for a request:
//!
//! ```text
//! router -> validator chain -> collection call -> response builder -> JSON
//! ```
//!
//! Validators reject with [`error::ApiError`]; the first rejection
//! short-circuits the chain, so handlers are total over validated input.
//! Collections trust their callers and enforce nothing themselves - the
//! schema's unique indexes are the only invariant enforcement below the
//! validators, and they exist to settle check-then-act races.

/// Server setup, configuration, and shared state
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Request middleware
pub mod middleware;

/// Freets (short posts)
pub mod freet;

/// Follower/followee relationships
pub mod follow;

/// Groups of members and shared freets
pub mod group;

/// Per-user word filters
pub mod word_filter;

pub use error::ApiError;
pub use server::create_app;
