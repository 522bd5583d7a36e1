//! In-memory thread and post store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::warn;

use crate::domain::entities::{Post, Thread, ThreadId};
use crate::domain::errors::StoreError;
use crate::domain::ports::ThreadStore;

#[derive(Default)]
struct Inner {
    threads: HashMap<ThreadId, Thread>,
    posts: HashMap<ThreadId, Vec<Post>>,
}

/// Thread store backed by in-memory maps.
#[derive(Default)]
pub struct MemoryThreadStore {
    inner: RwLock<Inner>,
}

impl MemoryThreadStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a thread.
    pub async fn insert_thread(&self, thread: Thread) {
        self.inner.write().await.threads.insert(thread.id, thread);
    }

    /// Appends a post to its thread and records the activity on the thread.
    pub async fn add_post(&self, post: Post) {
        let mut inner = self.inner.write().await;

        match inner.threads.get_mut(&post.thread_id) {
            Some(thread) => thread.touch(post.created_at),
            None => {
                warn!(thread_id = %post.thread_id, "Post added for unknown thread");
            }
        }

        inner.posts.entry(post.thread_id).or_default().push(post);
    }

    /// Soft-deletes a thread, hiding it from every query.
    pub async fn soft_delete(&self, id: ThreadId, now: DateTime<Utc>) {
        if let Some(thread) = self.inner.write().await.threads.get_mut(&id) {
            thread.deleted_at = Some(now);
        }
    }
}

#[async_trait]
impl ThreadStore for MemoryThreadStore {
    async fn find(&self, id: ThreadId) -> Result<Option<Thread>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .threads
            .get(&id)
            .filter(|thread| !thread.is_deleted())
            .cloned())
    }

    async fn updated_after(&self, since: DateTime<Utc>) -> Result<Vec<Thread>, StoreError> {
        let inner = self.inner.read().await;
        let mut recent: Vec<Thread> = inner
            .threads
            .values()
            .filter(|thread| !thread.is_deleted() && thread.updated_at > since)
            .cloned()
            .collect();
        recent.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(recent)
    }

    async fn post_count(&self, thread: ThreadId) -> Result<u64, StoreError> {
        let inner = self.inner.read().await;
        let count = inner
            .posts
            .get(&thread)
            .map_or(0, |posts| posts.iter().filter(|post| !post.is_deleted()).count());
        Ok(count as u64)
    }

    async fn last_post(&self, thread: ThreadId) -> Result<Option<Post>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.posts.get(&thread).and_then(|posts| {
            posts
                .iter()
                .filter(|post| !post.is_deleted())
                .max_by_key(|post| post.created_at)
                .cloned()
        }))
    }
}
