/**
 * Freet Collection
 *
 * Thin async facade over the freets table. Every read returns populated
 * rows (author username joined in); no method enforces invariants -
 * that is the validators' job.
 */
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// A freet row with its author resolved to a username.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PopulatedFreet {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author_username: String,
    pub content: String,
    pub anonymous: bool,
    pub in_group: bool,
    pub date_created: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
}

const SELECT_POPULATED: &str = r#"
    SELECT f.id, f.author_id, u.username AS author_username,
           f.content, f.anonymous, f.in_group, f.date_created, f.date_modified
    FROM freets f
    JOIN users u ON u.id = f.author_id
"#;

/// Add a freet.
pub async fn create(
    pool: &PgPool,
    author_id: Uuid,
    content: &str,
    anonymous: bool,
    in_group: bool,
) -> Result<PopulatedFreet, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO freets (id, author_id, content, anonymous, in_group, date_created, date_modified)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(id)
    .bind(author_id)
    .bind(content)
    .bind(anonymous)
    .bind(in_group)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    find_one(pool, id).await?.ok_or(sqlx::Error::RowNotFound)
}

/// Find a freet by id.
pub async fn find_one(pool: &PgPool, freet_id: Uuid) -> Result<Option<PopulatedFreet>, sqlx::Error> {
    sqlx::query_as::<_, PopulatedFreet>(&format!("{SELECT_POPULATED} WHERE f.id = $1"))
        .bind(freet_id)
        .fetch_optional(pool)
        .await
}

/// All feed freets, newest modification first. Group-only freets are
/// excluded from the feed.
pub async fn find_all(pool: &PgPool) -> Result<Vec<PopulatedFreet>, sqlx::Error> {
    sqlx::query_as::<_, PopulatedFreet>(&format!(
        "{SELECT_POPULATED} WHERE f.in_group = FALSE ORDER BY f.date_modified DESC"
    ))
    .fetch_all(pool)
    .await
}

/// All feed freets by the given author, newest modification first.
pub async fn find_all_by_author(
    pool: &PgPool,
    author_id: Uuid,
) -> Result<Vec<PopulatedFreet>, sqlx::Error> {
    sqlx::query_as::<_, PopulatedFreet>(&format!(
        "{SELECT_POPULATED} WHERE f.author_id = $1 AND f.in_group = FALSE ORDER BY f.date_modified DESC"
    ))
    .bind(author_id)
    .fetch_all(pool)
    .await
}

/// Delete a freet by id.
pub async fn delete_one(pool: &PgPool, freet_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM freets WHERE id = $1")
        .bind(freet_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Delete all freets by the given author.
pub async fn delete_all_by_author(pool: &PgPool, author_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM freets WHERE author_id = $1")
        .bind(author_id)
        .execute(pool)
        .await?;
    Ok(())
}
