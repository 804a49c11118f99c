//! # In-Memory Profile Repository
//!
//! Process-local profile store. Everything is lost when the process exits.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::models::user::UserProfile;
use crate::storage::traits::{ProfilePredicate, ProfileStorage};

#[derive(Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<BTreeMap<String, UserProfile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait]
impl ProfileStorage for InMemoryProfileRepository {
    async fn get(&self, email_key: &str) -> Result<Option<UserProfile>> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(email_key).cloned())
    }

    async fn put(&self, email_key: &str, profile: UserProfile) -> Result<()> {
        let mut profiles = self.profiles.write().await;
        debug!("Storing profile {} under '{}'", profile.id, email_key);
        profiles.insert(email_key.to_string(), profile);
        Ok(())
    }

    async fn remove(&self, email_key: &str) -> Result<Option<UserProfile>> {
        let mut profiles = self.profiles.write().await;
        let removed = profiles.remove(email_key);
        if removed.is_some() {
            debug!("Removed profile stored under '{}'", email_key);
        }
        Ok(removed)
    }

    async fn scan(&self, predicate: ProfilePredicate<'_>) -> Result<Vec<UserProfile>> {
        let profiles = self.profiles.read().await;
        Ok(profiles
            .values()
            .filter(|profile| predicate(profile))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn profile(email: &str, phone: Option<&str>) -> UserProfile {
        UserProfile::new_registration(
            email.to_string(),
            "Guest".to_string(),
            phone.map(str::to_string),
            None,
            Utc.with_ymd_and_hms(2024, 8, 1, 10, 0, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_put_get_remove() {
        let repo = InMemoryProfileRepository::new();
        assert!(repo.is_empty().await);

        let stored = profile("a@example.com", None);
        repo.put("a@example.com", stored.clone()).await.unwrap();

        assert_eq!(repo.get("a@example.com").await.unwrap(), Some(stored.clone()));
        assert_eq!(repo.get("b@example.com").await.unwrap(), None);
        assert_eq!(repo.len().await, 1);

        assert_eq!(repo.remove("a@example.com").await.unwrap(), Some(stored));
        assert_eq!(repo.remove("a@example.com").await.unwrap(), None);
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_put_replaces_existing_entry() {
        let repo = InMemoryProfileRepository::new();
        let mut stored = profile("a@example.com", None);
        repo.put("a@example.com", stored.clone()).await.unwrap();

        stored.full_name = "Renamed".to_string();
        repo.put("a@example.com", stored).await.unwrap();

        let fetched = repo.get("a@example.com").await.unwrap().unwrap();
        assert_eq!(fetched.full_name, "Renamed");
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_scan_filters_in_key_order() {
        let repo = InMemoryProfileRepository::new();
        repo.put("c@example.com", profile("c@example.com", Some("+263111"))).await.unwrap();
        repo.put("a@example.com", profile("a@example.com", Some("+263111"))).await.unwrap();
        repo.put("b@example.com", profile("b@example.com", Some("+263222"))).await.unwrap();

        let matches = repo
            .scan(&|p: &UserProfile| p.matches_phone("+263111"))
            .await
            .unwrap();

        let emails: Vec<&str> = matches.iter().map(|p| p.email.as_str()).collect();
        assert_eq!(emails, vec!["a@example.com", "c@example.com"]);
    }
}
