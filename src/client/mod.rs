//! Client Module
//!
//! Client-side state and navigation for a Fritter frontend. The store
//! mirrors the backend's resources (feed, follows, groups, word filter)
//! and refreshes each one by fetching the full list and replacing its
//! local copy wholesale. Alerts are short-lived status messages with a
//! fixed expiry deadline.

/// Application state store
pub mod store;

/// Route resolution and navigation guard
pub mod router;

pub use router::{navigation_guard, Route};
pub use store::ClientStore;
