//! Follows - directed follower/followee relationships
//!
//! One row per (follower, followee) pair; the unique index on that pair
//! and the no-self-follow check constraint back up the validators.

pub mod db;
pub mod handlers;
pub mod responses;
pub mod validators;

pub use handlers::routes;
