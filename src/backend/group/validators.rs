/**
 * Group Validators
 *
 * Ordered per route: cheap syntactic checks precede existence checks
 * precede relationship checks. Each route declares its own ordering in
 * its handler; there is no shared ordering policy.
 */
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::users::{get_user_by_username, User};
use crate::backend::error::ApiError;
use crate::backend::group::db::{self, PopulatedGroup};

pub const MAX_NAME_LENGTH: usize = 50;

/// Content check: group name not blank after trimming (400), at most 50
/// characters (413).
pub fn valid_group_name(name: &str) -> Result<(), ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::validation(
            "Group name must be at least one character long.",
        ));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ApiError::too_large(
            "Group name must be no more than 50 characters.",
        ));
    }
    Ok(())
}

/// Existence check: the group id is syntactically valid and refers to a
/// stored group (404 otherwise).
pub async fn group_exists(pool: &PgPool, group_id: &str) -> Result<PopulatedGroup, ApiError> {
    let not_found =
        || ApiError::not_found(format!("Group with group ID {group_id} does not exist."));

    let id = Uuid::parse_str(group_id).map_err(|_| not_found())?;
    db::find_one(pool, id).await?.ok_or_else(not_found)
}

/// Existence check for the ?creator= query: name given (400) and
/// resolvable (404).
pub async fn creator_exists(pool: &PgPool, creator: &str) -> Result<User, ApiError> {
    if creator.trim().is_empty() {
        return Err(ApiError::validation(
            "Provided creator username must be nonempty.",
        ));
    }
    get_user_by_username(pool, creator).await?.ok_or_else(|| {
        ApiError::not_found(format!("A creator with username {creator} does not exist."))
    })
}

/// Existence check for the ?member= query.
pub async fn member_user_exists(pool: &PgPool, member: &str) -> Result<User, ApiError> {
    if member.trim().is_empty() {
        return Err(ApiError::validation(
            "Provided member username must be nonempty.",
        ));
    }
    get_user_by_username(pool, member)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("A user with username {member} does not exist.")))
}

/// Authorization check: only the creator may rename or delete a group.
pub fn is_group_creator(group: &PopulatedGroup, user_id: Uuid) -> Result<(), ApiError> {
    if group.record.creator_id != user_id {
        return Err(ApiError::forbidden("Cannot modify other users' groups."));
    }
    Ok(())
}

/// Relationship check for join: must not already be a member.
pub async fn not_group_member(pool: &PgPool, group_id: Uuid, user_id: Uuid) -> Result<(), ApiError> {
    if db::member_exists(pool, group_id, user_id).await? {
        return Err(ApiError::duplicate("You are already a member of this group."));
    }
    Ok(())
}

/// Authorization/relationship check: must be a member to modify group
/// content or leave.
pub async fn is_group_member(pool: &PgPool, group_id: Uuid, user_id: Uuid) -> Result<(), ApiError> {
    if !db::member_exists(pool, group_id, user_id).await? {
        return Err(ApiError::validation("You are not a member of this group."));
    }
    Ok(())
}

/// Relationship check: the freet must be contained in the group.
pub async fn freet_in_group(pool: &PgPool, group_id: Uuid, freet_id: Uuid) -> Result<(), ApiError> {
    if !db::freet_in_group(pool, group_id, freet_id).await? {
        return Err(ApiError::validation("This freet is not in the group."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use chrono::Utc;
    use crate::backend::group::db::GroupRecord;

    fn sample_group(creator_id: Uuid) -> PopulatedGroup {
        PopulatedGroup {
            record: GroupRecord {
                id: Uuid::new_v4(),
                creator_id,
                creator_username: "alice".to_string(),
                name: "Book Club".to_string(),
                date_created: Utc::now(),
                date_modified: Utc::now(),
            },
            members: vec!["alice".to_string()],
            freets: vec![],
        }
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = valid_group_name("  \t ").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_oversized_name_rejected_with_413() {
        let long = "g".repeat(MAX_NAME_LENGTH + 1);
        let err = valid_group_name(&long).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_name_at_limit_accepted() {
        assert!(valid_group_name(&"g".repeat(MAX_NAME_LENGTH)).is_ok());
        assert!(valid_group_name("Book Club").is_ok());
    }

    #[test]
    fn test_creator_check() {
        let creator = Uuid::new_v4();
        let group = sample_group(creator);
        assert!(is_group_creator(&group, creator).is_ok());

        let err = is_group_creator(&group, Uuid::new_v4()).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
    }
}
