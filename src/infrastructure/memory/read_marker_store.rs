//! In-memory read-marker store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::entities::{ReadMarker, ThreadId, UserId};
use crate::domain::errors::StoreError;
use crate::domain::ports::ReadMarkerStore;

/// Read-marker store backed by a map keyed on `(thread, user)`.
///
/// The map key is the uniqueness constraint: an upsert holds the write lock
/// for the whole insert-or-update, so concurrent calls for the same pair
/// cannot leave duplicate markers.
#[derive(Default)]
pub struct MemoryReadMarkerStore {
    markers: RwLock<HashMap<(ThreadId, UserId), ReadMarker>>,
}

impl MemoryReadMarkerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of markers currently stored.
    pub async fn marker_count(&self) -> usize {
        self.markers.read().await.len()
    }
}

#[async_trait]
impl ReadMarkerStore for MemoryReadMarkerStore {
    async fn find(&self, thread: ThreadId, user: UserId) -> Result<Option<ReadMarker>, StoreError> {
        Ok(self.markers.read().await.get(&(thread, user)).cloned())
    }

    async fn upsert(
        &self,
        thread: ThreadId,
        user: UserId,
        read_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        self.markers
            .write()
            .await
            .insert((thread, user), ReadMarker::new(thread, user, read_at));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[tokio::test]
    async fn upsert_replaces_instead_of_duplicating() {
        let store = MemoryReadMarkerStore::new();
        let now = Utc::now();

        store.upsert(ThreadId(1), UserId(7), now).await.unwrap();
        store
            .upsert(ThreadId(1), UserId(7), now + Duration::minutes(5))
            .await
            .unwrap();

        assert_eq!(store.marker_count().await, 1);
        let marker = store.find(ThreadId(1), UserId(7)).await.unwrap().unwrap();
        assert_eq!(marker.read_at, now + Duration::minutes(5));
    }

    #[tokio::test]
    async fn markers_are_scoped_per_pair() {
        let store = MemoryReadMarkerStore::new();
        let now = Utc::now();

        store.upsert(ThreadId(1), UserId(7), now).await.unwrap();
        store.upsert(ThreadId(1), UserId(8), now).await.unwrap();
        store.upsert(ThreadId(2), UserId(7), now).await.unwrap();

        assert_eq!(store.marker_count().await, 3);
        assert!(store.find(ThreadId(2), UserId(8)).await.unwrap().is_none());
    }
}
