//! Thread store port definition.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{Post, Thread, ThreadId};
use crate::domain::errors::StoreError;

/// Port for thread and post queries.
///
/// Soft-deleted threads and posts are invisible through this port.
#[async_trait]
pub trait ThreadStore: Send + Sync {
    /// Looks up a thread by ID.
    async fn find(&self, id: ThreadId) -> Result<Option<Thread>, StoreError>;

    /// Returns threads with activity after `since`, newest first.
    async fn updated_after(&self, since: DateTime<Utc>) -> Result<Vec<Thread>, StoreError>;

    /// Counts the posts in a thread, the opening post included.
    async fn post_count(&self, thread: ThreadId) -> Result<u64, StoreError>;

    /// Returns the most recent post in a thread.
    async fn last_post(&self, thread: ThreadId) -> Result<Option<Post>, StoreError>;
}
