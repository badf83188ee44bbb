//! Groups - named collections of members and shared freets
//!
//! A group is owned by its creator (who is always an initial member) and
//! mutated by rename, member join/leave, and freet add/remove. Removing a
//! freet from a group also deletes the freet itself - a synchronized
//! deletion, not a cascade.

pub mod db;
pub mod handlers;
pub mod responses;
pub mod validators;

pub use handlers::routes;
