//! Freets - the short posts everything else hangs off
//!
//! Groups embed freets, the client feed lists them, and word filters hide
//! them. Freets posted into a group carry `in_group = true` and are kept
//! out of the main feed.

pub mod db;
pub mod handlers;
pub mod responses;
pub mod validators;

pub use handlers::routes;
