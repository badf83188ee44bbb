/**
 * Client Store
 *
 * Holds everything a Fritter frontend renders: the signed-in username,
 * the feed (optionally filtered to one author), follower/followee lists,
 * the word filter, groups (optionally filtered by name), and transient
 * alerts.
 *
 * Refresh never patches in place. Each refresh fetches the complete
 * current list from the backend and replaces the local copy wholesale,
 * so the store can never drift into a partially-stale mix.
 */
use std::collections::HashMap;
use std::time::{Duration, Instant};

use reqwest::Client;

use crate::shared::responses::{FreetResponse, GroupResponse, WordFilterResponse};

/// How long an alert stays visible.
const ALERT_TTL: Duration = Duration::from_secs(3);

/// A transient status message keyed by its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertEntry {
    /// "success" or "error"
    pub status: String,
    /// When the alert should disappear
    pub deadline: Instant,
}

/// Client-side application state.
#[derive(Debug)]
pub struct ClientStore {
    base_url: String,
    http: Client,

    /// Username of the signed-in user, or None when signed out
    pub username: Option<String>,
    /// Author filter applied to the feed, or None for all freets
    pub filter: Option<String>,
    /// The current feed
    pub freets: Vec<FreetResponse>,
    /// Usernames following the signed-in user
    pub followers: Vec<String>,
    /// Usernames the signed-in user follows
    pub followees: Vec<String>,
    /// The signed-in user's blocked words
    pub word_filter: Vec<WordFilterResponse>,
    /// Name filter applied to groups, or None for all groups
    pub groups_filter: Option<String>,
    /// The current group listing
    pub groups: Vec<GroupResponse>,
    /// Active alerts, keyed by message text
    pub alerts: HashMap<String, AlertEntry>,
}

impl ClientStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
            username: None,
            filter: None,
            freets: Vec::new(),
            followers: Vec::new(),
            followees: Vec::new(),
            word_filter: Vec::new(),
            groups_filter: None,
            groups: Vec::new(),
            alerts: HashMap::new(),
        }
    }

    /// True when a user is signed in.
    pub fn signed_in(&self) -> bool {
        self.username.is_some()
    }

    pub fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub fn update_filter(&mut self, filter: Option<String>) {
        self.filter = filter;
    }

    pub fn update_freets(&mut self, freets: Vec<FreetResponse>) {
        self.freets = freets;
    }

    pub fn update_followers(&mut self, followers: Vec<String>) {
        self.followers = followers;
    }

    pub fn update_followees(&mut self, followees: Vec<String>) {
        self.followees = followees;
    }

    pub fn update_word_filter(&mut self, words: Vec<WordFilterResponse>) {
        self.word_filter = words;
    }

    pub fn update_groups_filter(&mut self, filter: Option<String>) {
        self.groups_filter = filter;
    }

    pub fn update_groups(&mut self, groups: Vec<GroupResponse>) {
        self.groups = groups;
    }

    /// Re-fetch the feed, honoring the current author filter, and replace
    /// the local copy.
    pub async fn refresh_freets(&mut self) -> Result<(), reqwest::Error> {
        let url = match &self.filter {
            Some(author) => format!("{}/api/freets?author={}", self.base_url, author),
            None => format!("{}/api/freets", self.base_url),
        };
        let freets = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<FreetResponse>>()
            .await?;
        self.freets = freets;
        Ok(())
    }

    /// Re-fetch groups, honoring the current name filter, and replace the
    /// local copy.
    pub async fn refresh_groups(&mut self) -> Result<(), reqwest::Error> {
        let url = match &self.groups_filter {
            Some(name) => format!("{}/api/groups?groupName={}", self.base_url, name),
            None => format!("{}/api/groups", self.base_url),
        };
        let groups = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<GroupResponse>>()
            .await?;
        self.groups = groups;
        Ok(())
    }

    /// Show an alert. Re-raising an existing message pushes its deadline
    /// out rather than stacking a duplicate.
    pub fn alert(&mut self, message: impl Into<String>, status: impl Into<String>) {
        self.alerts.insert(
            message.into(),
            AlertEntry {
                status: status.into(),
                deadline: Instant::now() + ALERT_TTL,
            },
        );
    }

    /// Drop every alert whose deadline has passed.
    pub fn sweep_expired(&mut self) {
        self.sweep_expired_at(Instant::now());
    }

    fn sweep_expired_at(&mut self, now: Instant) {
        self.alerts.retain(|_, entry| entry.deadline > now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_alert_expiry() {
        let mut store = ClientStore::new("http://localhost:3000");
        store.alert("Your freet was created successfully.", "success");
        store.alert("Freet content must be at least one character long.", "error");
        assert_eq!(store.alerts.len(), 2);

        // Nothing expires before the deadline.
        store.sweep_expired_at(Instant::now());
        assert_eq!(store.alerts.len(), 2);

        // Everything expires after it.
        store.sweep_expired_at(Instant::now() + ALERT_TTL + Duration::from_millis(1));
        assert!(store.alerts.is_empty());
    }

    #[test]
    fn test_alert_reraise_extends_deadline() {
        let mut store = ClientStore::new("http://localhost:3000");
        store.alert("You have followed successfully.", "success");
        let first = store.alerts["You have followed successfully."].deadline;

        store.alert("You have followed successfully.", "success");
        let second = store.alerts["You have followed successfully."].deadline;

        assert_eq!(store.alerts.len(), 1);
        assert!(second >= first);
    }

    #[tokio::test]
    async fn test_refresh_freets_replaces_wholesale() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"[
            {
                "id": "11111111-1111-1111-1111-111111111111",
                "author": "alice",
                "content": "hello world",
                "anonymous": false,
                "dateCreated": "August 30th 2026, 3:05:07 pm",
                "dateModified": "August 30th 2026, 3:05:07 pm"
            }
        ]"#;
        let mock = server
            .mock("GET", "/api/freets")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let mut store = ClientStore::new(server.url());
        store.freets = vec![FreetResponse {
            id: "stale".to_string(),
            author: "bob".to_string(),
            content: "old".to_string(),
            anonymous: false,
            date_created: "old".to_string(),
            date_modified: "old".to_string(),
        }];

        store.refresh_freets().await.unwrap();
        mock.assert_async().await;

        assert_eq!(store.freets.len(), 1);
        assert_eq!(store.freets[0].author, "alice");
        assert_eq!(store.freets[0].content, "hello world");
    }

    #[tokio::test]
    async fn test_refresh_freets_applies_author_filter() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/freets")
            .match_query(mockito::Matcher::UrlEncoded(
                "author".into(),
                "alice".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let mut store = ClientStore::new(server.url());
        store.update_filter(Some("alice".to_string()));
        store.refresh_freets().await.unwrap();
        mock.assert_async().await;
        assert!(store.freets.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_groups_applies_name_filter() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/groups")
            .match_query(mockito::Matcher::UrlEncoded(
                "groupName".into(),
                "Book Club".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let mut store = ClientStore::new(server.url());
        store.update_groups_filter(Some("Book Club".to_string()));
        store.refresh_groups().await.unwrap();
        mock.assert_async().await;
        assert!(store.groups.is_empty());
    }
}
