/**
 * Follow Collection
 *
 * Thin async facade over the follows table; reads come back populated
 * with both usernames. Invariant enforcement (no self-follow, no
 * duplicates) lives in the validators and the schema, not here.
 */
use sqlx::PgPool;
use uuid::Uuid;

/// A follow row with both endpoints resolved to usernames.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PopulatedFollow {
    pub id: Uuid,
    pub follower_id: Uuid,
    pub followee_id: Uuid,
    pub follower_username: String,
    pub followee_username: String,
}

const SELECT_POPULATED: &str = r#"
    SELECT f.id, f.follower_id, f.followee_id,
           fr.username AS follower_username, fe.username AS followee_username
    FROM follows f
    JOIN users fr ON fr.id = f.follower_id
    JOIN users fe ON fe.id = f.followee_id
"#;

/// Follow a user.
pub async fn create(
    pool: &PgPool,
    follower_id: Uuid,
    followee_id: Uuid,
) -> Result<PopulatedFollow, sqlx::Error> {
    let id = Uuid::new_v4();

    sqlx::query("INSERT INTO follows (id, follower_id, followee_id) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(follower_id)
        .bind(followee_id)
        .execute(pool)
        .await?;

    sqlx::query_as::<_, PopulatedFollow>(&format!("{SELECT_POPULATED} WHERE f.id = $1"))
        .bind(id)
        .fetch_one(pool)
        .await
}

/// Find a (follower, followee) pair, if it exists.
pub async fn find_pair(
    pool: &PgPool,
    follower_id: Uuid,
    followee_id: Uuid,
) -> Result<Option<PopulatedFollow>, sqlx::Error> {
    sqlx::query_as::<_, PopulatedFollow>(&format!(
        "{SELECT_POPULATED} WHERE f.follower_id = $1 AND f.followee_id = $2"
    ))
    .bind(follower_id)
    .bind(followee_id)
    .fetch_optional(pool)
    .await
}

/// All followers of a user.
pub async fn find_followers_of(
    pool: &PgPool,
    followee_id: Uuid,
) -> Result<Vec<PopulatedFollow>, sqlx::Error> {
    sqlx::query_as::<_, PopulatedFollow>(&format!("{SELECT_POPULATED} WHERE f.followee_id = $1"))
        .bind(followee_id)
        .fetch_all(pool)
        .await
}

/// Everyone a user follows.
pub async fn find_followees_of(
    pool: &PgPool,
    follower_id: Uuid,
) -> Result<Vec<PopulatedFollow>, sqlx::Error> {
    sqlx::query_as::<_, PopulatedFollow>(&format!("{SELECT_POPULATED} WHERE f.follower_id = $1"))
        .bind(follower_id)
        .fetch_all(pool)
        .await
}

/// Unfollow a user.
pub async fn delete_pair(
    pool: &PgPool,
    follower_id: Uuid,
    followee_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND followee_id = $2")
        .bind(follower_id)
        .bind(followee_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Remove every follow where the user is the follower (account deletion).
pub async fn delete_all_as_follower(pool: &PgPool, follower_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM follows WHERE follower_id = $1")
        .bind(follower_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Remove every follow where the user is the followee (account deletion).
pub async fn delete_all_as_followee(pool: &PgPool, followee_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM follows WHERE followee_id = $1")
        .bind(followee_id)
        .execute(pool)
        .await?;
    Ok(())
}
