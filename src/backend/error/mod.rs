//! Backend Error Module
//!
//! One error type covers the whole REST surface. Validators and handlers
//! return `Result<_, ApiError>`; the `IntoResponse` impl (in
//! `conversion`) turns a rejection into the `{"error": ...}` JSON body
//! with the mapped status code.
//!
//! # Error Taxonomy
//!
//! - validation errors (malformed/missing/oversized input) - 400/413
//! - not-found errors (referenced entity absent) - 404
//! - authorization errors (actor lacks rights over target) - 403
//! - conflict errors (duplicate relationship/state) - 400
//! - unanticipated store failures - 500

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
