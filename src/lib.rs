//! Fritter - Main Library
//!
//! Fritter is a social-posting application: users write short posts
//! ("freets"), follow each other, organize freets into named groups, and
//! keep per-user word filters that hide matching posts client-side.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between the client and the backend
//!   - Response shapes (the exact JSON the client consumes)
//!   - Human-readable date formatting
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server over PostgreSQL
//!   - Per-resource collections, validators, response builders, routers
//!   - Authentication and error types
//!
//! - **`client`** - Client-side state
//!   - Central mutable store with fetch-then-replace refresh
//!   - Page routing table and navigation guard

pub mod backend;
pub mod client;
pub mod shared;
