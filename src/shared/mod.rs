//! Shared Module
//!
//! Types used on both sides of the HTTP boundary. The backend's response
//! builders produce these shapes; the client store deserializes them.

pub mod responses;
pub mod time;

pub use responses::{
    FollowResponse, FreetResponse, GroupResponse, UserResponse, WordFilterResponse,
};
