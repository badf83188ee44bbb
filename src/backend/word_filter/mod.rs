//! Word filters - per-user sets of blocked words
//!
//! One row per (user, word) pair, unique per user. The client uses the
//! word list to hide matching freets; the backend only stores it.

pub mod db;
pub mod handlers;
pub mod responses;
pub mod validators;

pub use handlers::routes;
