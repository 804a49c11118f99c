//! # Storage Traits
//!
//! This module defines the storage abstraction that lets the domain layer work
//! with any profile store. The in-memory implementation is the only one today;
//! a durable backend only has to implement [`ProfileStorage`].

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::user::UserProfile;

/// Predicate used by [`ProfileStorage::scan`]
pub type ProfilePredicate<'a> = &'a (dyn Fn(&UserProfile) -> bool + Send + Sync);

/// Trait defining the interface for guest profile storage
///
/// Profiles are keyed by their lowercased email address.
#[async_trait]
pub trait ProfileStorage: Send + Sync {
    /// Retrieve the profile stored under an email key
    async fn get(&self, email_key: &str) -> Result<Option<UserProfile>>;

    /// Insert or replace the profile stored under an email key
    async fn put(&self, email_key: &str, profile: UserProfile) -> Result<()>;

    /// Remove a profile, returning it if it existed
    async fn remove(&self, email_key: &str) -> Result<Option<UserProfile>>;

    /// Return every profile matching the predicate, ordered by email key
    async fn scan(&self, predicate: ProfilePredicate<'_>) -> Result<Vec<UserProfile>>;
}
