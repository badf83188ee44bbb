/**
 * Group Collection
 *
 * Thin async facade over the freet_groups table and its two join tables
 * (group_members, group_freets). Reads come back fully populated: the
 * creator and members resolved to usernames, the contained freets
 * embedded. Only rename touches date_modified.
 */
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::freet::db::PopulatedFreet;

/// The scalar columns of a group, creator resolved to a username.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GroupRecord {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub creator_username: String,
    pub name: String,
    pub date_created: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
}

/// A fully populated group: record plus member usernames and freets.
#[derive(Debug, Clone)]
pub struct PopulatedGroup {
    pub record: GroupRecord,
    pub members: Vec<String>,
    pub freets: Vec<PopulatedFreet>,
}

const SELECT_RECORD: &str = r#"
    SELECT g.id, g.creator_id, u.username AS creator_username,
           g.name, g.date_created, g.date_modified
    FROM freet_groups g
    JOIN users u ON u.id = g.creator_id
"#;

const SELECT_GROUP_FREETS: &str = r#"
    SELECT f.id, f.author_id, u.username AS author_username,
           f.content, f.anonymous, f.in_group, f.date_created, f.date_modified
    FROM group_freets gf
    JOIN freets f ON f.id = gf.freet_id
    JOIN users u ON u.id = f.author_id
    WHERE gf.group_id = $1
    ORDER BY f.date_created
"#;

async fn populate(pool: &PgPool, record: GroupRecord) -> Result<PopulatedGroup, sqlx::Error> {
    let members: Vec<String> = sqlx::query_scalar(
        r#"
        SELECT u.username
        FROM group_members gm
        JOIN users u ON u.id = gm.user_id
        WHERE gm.group_id = $1
        ORDER BY u.username
        "#,
    )
    .bind(record.id)
    .fetch_all(pool)
    .await?;

    let freets = sqlx::query_as::<_, PopulatedFreet>(SELECT_GROUP_FREETS)
        .bind(record.id)
        .fetch_all(pool)
        .await?;

    Ok(PopulatedGroup {
        record,
        members,
        freets,
    })
}

async fn populate_all(
    pool: &PgPool,
    records: Vec<GroupRecord>,
) -> Result<Vec<PopulatedGroup>, sqlx::Error> {
    let mut groups = Vec::with_capacity(records.len());
    for record in records {
        groups.push(populate(pool, record).await?);
    }
    Ok(groups)
}

/// Create a group. The creator is always inserted as the first member.
pub async fn create(
    pool: &PgPool,
    creator_id: Uuid,
    name: &str,
) -> Result<PopulatedGroup, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let mut tx = pool.begin().await?;
    sqlx::query(
        r#"
        INSERT INTO freet_groups (id, creator_id, name, date_created, date_modified)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(id)
    .bind(creator_id)
    .bind(name)
    .bind(now)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    sqlx::query("INSERT INTO group_members (group_id, user_id) VALUES ($1, $2)")
        .bind(id)
        .bind(creator_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    find_one(pool, id).await?.ok_or(sqlx::Error::RowNotFound)
}

/// Find a group by id.
pub async fn find_one(pool: &PgPool, group_id: Uuid) -> Result<Option<PopulatedGroup>, sqlx::Error> {
    let record = sqlx::query_as::<_, GroupRecord>(&format!("{SELECT_RECORD} WHERE g.id = $1"))
        .bind(group_id)
        .fetch_optional(pool)
        .await?;

    match record {
        Some(record) => Ok(Some(populate(pool, record).await?)),
        None => Ok(None),
    }
}

/// All groups, most recently modified first.
pub async fn find_all(pool: &PgPool) -> Result<Vec<PopulatedGroup>, sqlx::Error> {
    let records =
        sqlx::query_as::<_, GroupRecord>(&format!("{SELECT_RECORD} ORDER BY g.date_modified DESC"))
            .fetch_all(pool)
            .await?;
    populate_all(pool, records).await
}

/// All groups with the given name, most recently modified first.
pub async fn find_all_by_name(pool: &PgPool, name: &str) -> Result<Vec<PopulatedGroup>, sqlx::Error> {
    let records = sqlx::query_as::<_, GroupRecord>(&format!(
        "{SELECT_RECORD} WHERE g.name = $1 ORDER BY g.date_modified DESC"
    ))
    .bind(name)
    .fetch_all(pool)
    .await?;
    populate_all(pool, records).await
}

/// All groups created by the given user.
pub async fn find_all_by_creator(
    pool: &PgPool,
    creator_id: Uuid,
) -> Result<Vec<PopulatedGroup>, sqlx::Error> {
    let records = sqlx::query_as::<_, GroupRecord>(&format!(
        "{SELECT_RECORD} WHERE g.creator_id = $1 ORDER BY g.date_modified DESC"
    ))
    .bind(creator_id)
    .fetch_all(pool)
    .await?;
    populate_all(pool, records).await
}

/// All groups the given user is a member of.
pub async fn find_all_by_member(
    pool: &PgPool,
    member_id: Uuid,
) -> Result<Vec<PopulatedGroup>, sqlx::Error> {
    let records = sqlx::query_as::<_, GroupRecord>(&format!(
        r#"{SELECT_RECORD}
        JOIN group_members gm ON gm.group_id = g.id
        WHERE gm.user_id = $1
        ORDER BY g.date_modified DESC"#
    ))
    .bind(member_id)
    .fetch_all(pool)
    .await?;
    populate_all(pool, records).await
}

/// Whether the user is a member of the group.
pub async fn member_exists(pool: &PgPool, group_id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM group_members WHERE group_id = $1 AND user_id = $2)",
    )
    .bind(group_id)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Whether the freet is contained in the group.
pub async fn freet_in_group(
    pool: &PgPool,
    group_id: Uuid,
    freet_id: Uuid,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM group_freets WHERE group_id = $1 AND freet_id = $2)",
    )
    .bind(group_id)
    .bind(freet_id)
    .fetch_one(pool)
    .await
}

/// Rename a group; this is the one mutation that touches date_modified.
pub async fn rename(
    pool: &PgPool,
    group_id: Uuid,
    name: &str,
) -> Result<Option<PopulatedGroup>, sqlx::Error> {
    sqlx::query("UPDATE freet_groups SET name = $1, date_modified = $2 WHERE id = $3")
        .bind(name)
        .bind(Utc::now())
        .bind(group_id)
        .execute(pool)
        .await?;

    find_one(pool, group_id).await
}

/// Add a member to a group.
pub async fn add_member(
    pool: &PgPool,
    group_id: Uuid,
    user_id: Uuid,
) -> Result<Option<PopulatedGroup>, sqlx::Error> {
    sqlx::query("INSERT INTO group_members (group_id, user_id) VALUES ($1, $2)")
        .bind(group_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    find_one(pool, group_id).await
}

/// Remove a member from a group.
pub async fn remove_member(
    pool: &PgPool,
    group_id: Uuid,
    user_id: Uuid,
) -> Result<Option<PopulatedGroup>, sqlx::Error> {
    sqlx::query("DELETE FROM group_members WHERE group_id = $1 AND user_id = $2")
        .bind(group_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    find_one(pool, group_id).await
}

/// Add a freet reference to a group.
pub async fn add_freet(
    pool: &PgPool,
    group_id: Uuid,
    freet_id: Uuid,
) -> Result<Option<PopulatedGroup>, sqlx::Error> {
    sqlx::query("INSERT INTO group_freets (group_id, freet_id) VALUES ($1, $2)")
        .bind(group_id)
        .bind(freet_id)
        .execute(pool)
        .await?;

    find_one(pool, group_id).await
}

/// Remove a freet reference from a group. Deleting the underlying freet
/// is the caller's responsibility (synchronized deletion in the handler).
pub async fn remove_freet(
    pool: &PgPool,
    group_id: Uuid,
    freet_id: Uuid,
) -> Result<Option<PopulatedGroup>, sqlx::Error> {
    sqlx::query("DELETE FROM group_freets WHERE group_id = $1 AND freet_id = $2")
        .bind(group_id)
        .bind(freet_id)
        .execute(pool)
        .await?;

    find_one(pool, group_id).await
}

/// Delete a group.
pub async fn delete_one(pool: &PgPool, group_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM freet_groups WHERE id = $1")
        .bind(group_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Delete all groups created by the given user (account deletion).
pub async fn delete_all_by_creator(pool: &PgPool, creator_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM freet_groups WHERE creator_id = $1")
        .bind(creator_id)
        .execute(pool)
        .await?;
    Ok(())
}
