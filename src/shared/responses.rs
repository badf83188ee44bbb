//! Client-facing response shapes
//!
//! These are the exact JSON field sets the client expects. Foreign keys
//! never appear here: everywhere the stored documents hold a user id, the
//! response carries the username instead. Dates are pre-formatted
//! human-readable strings (see [`crate::shared::time::format_date`]).

use serde::{Deserialize, Serialize};

/// A freet as the client sees it.
///
/// `author` is the display name, or `"Anonymous"` when the freet was
/// posted anonymously.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreetResponse {
    pub id: String,
    pub author: String,
    pub content: String,
    pub anonymous: bool,
    pub date_created: String,
    pub date_modified: String,
}

/// A follow relationship, with both endpoints as usernames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowResponse {
    pub id: String,
    pub follower: String,
    pub followee: String,
}

/// A group with its creator and members resolved to usernames and its
/// freets embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupResponse {
    pub id: String,
    pub creator: String,
    pub name: String,
    pub date_created: String,
    pub date_modified: String,
    pub members: Vec<String>,
    pub freets: Vec<FreetResponse>,
}

/// One blocked word in a user's word filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordFilterResponse {
    pub id: String,
    pub user: String,
    pub word: String,
}

/// Account info returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
}

/// Success envelope for mutations that return no entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `POST /api/follow` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowCreatedResponse {
    pub message: String,
    pub follow: FollowResponse,
}

/// Success body for every group mutation that returns the updated group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupUpdatedResponse {
    pub message: String,
    pub group: GroupResponse,
}

/// `POST /api/wordFilter` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordFilterCreatedResponse {
    pub message: String,
    pub word_filter: WordFilterResponse,
}

/// `POST /api/freets` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreetCreatedResponse {
    pub message: String,
    pub freet: FreetResponse,
}

/// Login/signup success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserResponse,
}
