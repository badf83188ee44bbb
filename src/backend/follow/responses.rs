/**
 * Follow Response Builder
 *
 * Pure transform: raw ids are dropped in favor of the two usernames.
 */
use crate::backend::follow::db::PopulatedFollow;
use crate::shared::responses::FollowResponse;

pub fn build_follow_response(follow: &PopulatedFollow) -> FollowResponse {
    FollowResponse {
        id: follow.id.to_string(),
        follower: follow.follower_username.clone(),
        followee: follow.followee_username.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    #[test]
    fn test_usernames_not_ids() {
        let follow = PopulatedFollow {
            id: Uuid::nil(),
            follower_id: Uuid::new_v4(),
            followee_id: Uuid::new_v4(),
            follower_username: "alice".to_string(),
            followee_username: "bob".to_string(),
        };
        let response = build_follow_response(&follow);
        assert_eq!(response.follower, "alice");
        assert_eq!(response.followee, "bob");
        assert_eq!(response.id, Uuid::nil().to_string());
        // Idempotent and pure.
        assert_eq!(response, build_follow_response(&follow));
    }
}
