//! End-to-end API tests against a real Postgres instance.
//!
//! Ignored by default: set TEST_DATABASE_URL to a scratch database and
//! run with `cargo test -- --ignored`. Each test signs up fresh users
//! with unique names, so tests can share a database.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use fritter::backend::create_app;

async fn test_server() -> TestServer {
    let url = std::env::var("TEST_DATABASE_URL")
        .expect("TEST_DATABASE_URL must point at a scratch database");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("failed to connect to test database");
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("failed to run migrations");
    TestServer::new(create_app(pool)).expect("failed to start test server")
}

fn unique_name(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

/// Sign up a fresh user and return (username, bearer token).
async fn signup(server: &TestServer, prefix: &str) -> (String, String) {
    let username = unique_name(prefix);
    let response = server
        .post("/api/users")
        .json(&json!({ "username": username, "password": "hunter2" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    let token = body["token"].as_str().expect("token in signup response");
    (username, token.to_string())
}

#[tokio::test]
#[ignore]
async fn test_signup_login_and_session() {
    let server = test_server().await;
    let (username, token) = signup(&server, "alice").await;

    // Duplicate signup is rejected.
    let dup = server
        .post("/api/users")
        .json(&json!({ "username": username, "password": "other" }))
        .await;
    dup.assert_status(StatusCode::BAD_REQUEST);

    // Wrong password is rejected.
    let bad = server
        .post("/api/users/session")
        .json(&json!({ "username": username, "password": "wrong" }))
        .await;
    bad.assert_status(StatusCode::FORBIDDEN);

    // The token identifies the user.
    let me = server
        .get("/api/users/session")
        .authorization_bearer(&token)
        .await;
    me.assert_status_ok();
    let body: Value = me.json();
    assert_eq!(body["username"], username.as_str());
}

#[tokio::test]
#[ignore]
async fn test_freet_lifecycle() {
    let server = test_server().await;
    let (username, token) = signup(&server, "author").await;

    // Posting requires sign-in.
    let anon = server
        .post("/api/freets")
        .json(&json!({ "content": "hello", "anonymous": false }))
        .await;
    anon.assert_status(StatusCode::FORBIDDEN);

    let created = server
        .post("/api/freets")
        .authorization_bearer(&token)
        .json(&json!({ "content": "my first freet", "anonymous": false }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let body: Value = created.json();
    let freet_id = body["freet"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["freet"]["author"], username.as_str());

    // The feed filtered by author contains it.
    let feed = server.get(&format!("/api/freets?author={username}")).await;
    feed.assert_status_ok();
    let freets: Value = feed.json();
    assert_eq!(freets.as_array().unwrap().len(), 1);

    // Another user cannot delete it.
    let (_, other_token) = signup(&server, "rival").await;
    let forbidden = server
        .delete(&format!("/api/freets/{freet_id}"))
        .authorization_bearer(&other_token)
        .await;
    forbidden.assert_status(StatusCode::FORBIDDEN);

    // The author can.
    let deleted = server
        .delete(&format!("/api/freets/{freet_id}"))
        .authorization_bearer(&token)
        .await;
    deleted.assert_status_ok();

    let feed = server.get(&format!("/api/freets?author={username}")).await;
    let freets: Value = feed.json();
    assert!(freets.as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore]
async fn test_anonymous_freet_hides_author() {
    let server = test_server().await;
    let (username, token) = signup(&server, "shy").await;

    let created = server
        .post("/api/freets")
        .authorization_bearer(&token)
        .json(&json!({ "content": "no names please", "anonymous": true }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let body: Value = created.json();
    assert_eq!(body["freet"]["author"], "Anonymous");

    // The author filter still finds it; the payload still hides the name.
    let feed = server.get(&format!("/api/freets?author={username}")).await;
    let freets: Value = feed.json();
    assert_eq!(freets[0]["author"], "Anonymous");
}

#[tokio::test]
#[ignore]
async fn test_follow_and_unfollow() {
    let server = test_server().await;
    let (follower, follower_token) = signup(&server, "follower").await;
    let (followee, _) = signup(&server, "followee").await;

    // Cannot follow yourself.
    let own = server
        .post("/api/follow")
        .authorization_bearer(&follower_token)
        .json(&json!({ "followeeName": follower }))
        .await;
    own.assert_status(StatusCode::BAD_REQUEST);

    let created = server
        .post("/api/follow")
        .authorization_bearer(&follower_token)
        .json(&json!({ "followeeName": followee }))
        .await;
    created.assert_status(StatusCode::CREATED);

    // Double-follow is rejected.
    let dup = server
        .post("/api/follow")
        .authorization_bearer(&follower_token)
        .json(&json!({ "followeeName": followee }))
        .await;
    dup.assert_status(StatusCode::BAD_REQUEST);

    // Both directions of the listing see the relation.
    let following = server
        .get(&format!("/api/follow?follower={follower}"))
        .await;
    following.assert_status_ok();
    let list: Value = following.json();
    assert_eq!(list[0]["followee"], followee.as_str());

    let followers_of = server
        .get(&format!("/api/follow?followee={followee}"))
        .await;
    let list: Value = followers_of.json();
    assert_eq!(list[0]["follower"], follower.as_str());

    let removed = server
        .delete(&format!("/api/follow/{followee}"))
        .authorization_bearer(&follower_token)
        .await;
    removed.assert_status_ok();

    let following = server
        .get(&format!("/api/follow?follower={follower}"))
        .await;
    let list: Value = following.json();
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore]
async fn test_group_freet_lifecycle() {
    let server = test_server().await;
    let (creator, creator_token) = signup(&server, "creator").await;

    let created = server
        .post("/api/groups")
        .authorization_bearer(&creator_token)
        .json(&json!({ "name": "Book Club" }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let body: Value = created.json();
    let group_id = body["group"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["group"]["members"][0], creator.as_str());

    // A second user joins and posts a freet into the group.
    let (member, member_token) = signup(&server, "member").await;
    let joined = server
        .put(&format!("/api/groups/{group_id}/join"))
        .authorization_bearer(&member_token)
        .await;
    joined.assert_status_ok();

    // Joining twice is rejected.
    let rejoin = server
        .put(&format!("/api/groups/{group_id}/join"))
        .authorization_bearer(&member_token)
        .await;
    rejoin.assert_status(StatusCode::BAD_REQUEST);

    let added = server
        .put(&format!("/api/groups/{group_id}/addFreet"))
        .authorization_bearer(&member_token)
        .json(&json!({ "content": "Hello", "anonymous": false }))
        .await;
    added.assert_status_ok();
    let added_body: Value = added.json();
    let freets = added_body["group"]["freets"].as_array().unwrap();
    assert_eq!(freets.len(), 1);
    assert_eq!(freets[0]["content"], "Hello");
    assert_eq!(freets[0]["author"], member.as_str());
    let freet_id = freets[0]["id"].as_str().unwrap().to_string();

    // Group freets stay out of the main feed.
    let feed = server.get(&format!("/api/freets?author={member}")).await;
    let feed_body: Value = feed.json();
    assert!(feed_body.as_array().unwrap().is_empty());

    // Removing the freet from the group also deletes the freet itself.
    let removed = server
        .put(&format!("/api/groups/{group_id}/deleteFreet/{freet_id}"))
        .authorization_bearer(&member_token)
        .await;
    removed.assert_status_ok();
    let removed_body: Value = removed.json();
    assert!(removed_body["group"]["freets"].as_array().unwrap().is_empty());

    let gone = server
        .delete(&format!("/api/freets/{freet_id}"))
        .authorization_bearer(&member_token)
        .await;
    gone.assert_status(StatusCode::NOT_FOUND);

    // Only the creator may delete the group.
    let not_creator = server
        .delete(&format!("/api/groups/{group_id}"))
        .authorization_bearer(&member_token)
        .await;
    not_creator.assert_status(StatusCode::FORBIDDEN);

    let left = server
        .put(&format!("/api/groups/{group_id}/leave"))
        .authorization_bearer(&member_token)
        .await;
    left.assert_status_ok();

    let deleted = server
        .delete(&format!("/api/groups/{group_id}"))
        .authorization_bearer(&creator_token)
        .await;
    deleted.assert_status_ok();
}

#[tokio::test]
#[ignore]
async fn test_word_filter_roundtrip() {
    let server = test_server().await;
    let (_, token) = signup(&server, "filterer").await;

    // Blank and oversized words are rejected before anything is stored.
    let blank = server
        .post("/api/wordFilter")
        .authorization_bearer(&token)
        .json(&json!({ "word": "   " }))
        .await;
    blank.assert_status(StatusCode::BAD_REQUEST);

    let long = server
        .post("/api/wordFilter")
        .authorization_bearer(&token)
        .json(&json!({ "word": "w".repeat(31) }))
        .await;
    long.assert_status(StatusCode::PAYLOAD_TOO_LARGE);

    // Removing a word that was never added is a 400.
    let absent = server
        .delete("/api/wordFilter/neverthere")
        .authorization_bearer(&token)
        .await;
    absent.assert_status(StatusCode::BAD_REQUEST);

    let added = server
        .post("/api/wordFilter")
        .authorization_bearer(&token)
        .json(&json!({ "word": "spoilers" }))
        .await;
    added.assert_status(StatusCode::CREATED);

    let dup = server
        .post("/api/wordFilter")
        .authorization_bearer(&token)
        .json(&json!({ "word": "spoilers" }))
        .await;
    dup.assert_status(StatusCode::BAD_REQUEST);

    let listed = server
        .get("/api/wordFilter")
        .authorization_bearer(&token)
        .await;
    listed.assert_status_ok();
    let words: Value = listed.json();
    assert_eq!(words[0]["word"], "spoilers");

    let removed = server
        .delete("/api/wordFilter/spoilers")
        .authorization_bearer(&token)
        .await;
    removed.assert_status_ok();

    let listed = server
        .get("/api/wordFilter")
        .authorization_bearer(&token)
        .await;
    let words: Value = listed.json();
    assert!(words.as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore]
async fn test_delete_account_cascades() {
    let server = test_server().await;
    let (username, token) = signup(&server, "leaver").await;

    server
        .post("/api/freets")
        .authorization_bearer(&token)
        .json(&json!({ "content": "soon gone", "anonymous": false }))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .delete("/api/users")
        .authorization_bearer(&token)
        .await
        .assert_status_ok();

    // The account's freets are gone with it.
    let feed = server.get(&format!("/api/freets?author={username}")).await;
    feed.assert_status(StatusCode::NOT_FOUND);
}
