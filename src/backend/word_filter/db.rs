/**
 * Word Filter Collection
 *
 * Thin async facade over the word_filters table; reads come back with
 * the owning username joined in.
 */
use sqlx::PgPool;
use uuid::Uuid;

/// A word-filter row with its owner resolved to a username.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PopulatedWordFilter {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub word: String,
}

const SELECT_POPULATED: &str = r#"
    SELECT w.id, w.user_id, u.username, w.word
    FROM word_filters w
    JOIN users u ON u.id = w.user_id
"#;

/// Add a word to a user's filter.
pub async fn create(
    pool: &PgPool,
    user_id: Uuid,
    word: &str,
) -> Result<PopulatedWordFilter, sqlx::Error> {
    let id = Uuid::new_v4();

    sqlx::query("INSERT INTO word_filters (id, user_id, word) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(user_id)
        .bind(word)
        .execute(pool)
        .await?;

    sqlx::query_as::<_, PopulatedWordFilter>(&format!("{SELECT_POPULATED} WHERE w.id = $1"))
        .bind(id)
        .fetch_one(pool)
        .await
}

/// All words in a user's filter.
pub async fn find_all_for_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<PopulatedWordFilter>, sqlx::Error> {
    sqlx::query_as::<_, PopulatedWordFilter>(&format!(
        "{SELECT_POPULATED} WHERE w.user_id = $1 ORDER BY w.word"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Find one word in a user's filter, if present.
pub async fn find_word(
    pool: &PgPool,
    user_id: Uuid,
    word: &str,
) -> Result<Option<PopulatedWordFilter>, sqlx::Error> {
    sqlx::query_as::<_, PopulatedWordFilter>(&format!(
        "{SELECT_POPULATED} WHERE w.user_id = $1 AND w.word = $2"
    ))
    .bind(user_id)
    .bind(word)
    .fetch_optional(pool)
    .await
}

/// Remove a word from a user's filter.
pub async fn delete_word(pool: &PgPool, user_id: Uuid, word: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM word_filters WHERE user_id = $1 AND word = $2")
        .bind(user_id)
        .bind(word)
        .execute(pool)
        .await?;
    Ok(())
}

/// Remove every word in a user's filter (account deletion).
pub async fn delete_all_for_user(pool: &PgPool, user_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM word_filters WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}
