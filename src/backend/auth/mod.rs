//! Authentication and user management
//!
//! The rest of the backend treats identity as given: validators receive a
//! verified user id from the `AuthUser` extractor and never re-check
//! credentials. This module supplies that identity layer - user rows with
//! bcrypt hashes, bearer tokens, and the account endpoints (signup,
//! login, delete-account with cascading cleanup).

pub mod handlers;
pub mod sessions;
pub mod users;

pub use users::User;
