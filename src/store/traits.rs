//! `ProfileStore` trait — backend-agnostic profile persistence.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::store::profile::UserProfile;

/// A durable key→profile mapping. No transactions, no TTL, no eviction.
///
/// `put` only fails when the underlying persistence layer is unavailable;
/// writing an existing key overwrites the prior value.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Insert or replace the profile stored under `key`.
    async fn put(&self, key: &str, profile: &UserProfile) -> Result<(), StorageError>;

    /// Look up a profile by key.
    async fn get(&self, key: &str) -> Result<Option<UserProfile>, StorageError>;
}
