//! Read-marker store port definition.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{ReadMarker, ThreadId, UserId};
use crate::domain::errors::StoreError;

/// Port for read-marker persistence.
///
/// Implementations must keep at most one marker per `(thread, user)` pair;
/// `upsert` is an atomic insert-or-update backed by a unique composite key,
/// not application-level locking. Retry policy, if any, also lives behind
/// this port.
#[async_trait]
pub trait ReadMarkerStore: Send + Sync {
    /// Looks up the marker for a `(thread, user)` pair.
    async fn find(&self, thread: ThreadId, user: UserId) -> Result<Option<ReadMarker>, StoreError>;

    /// Inserts or updates the marker for a `(thread, user)` pair.
    async fn upsert(
        &self,
        thread: ThreadId,
        user: UserId,
        read_at: DateTime<Utc>,
    ) -> Result<(), StoreError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use tokio::sync::RwLock;

    /// Mock read-marker store with call counters for testing.
    pub struct MockReadMarkerStore {
        markers: Arc<RwLock<HashMap<(ThreadId, UserId), ReadMarker>>>,
        find_calls: AtomicUsize,
        upsert_calls: AtomicUsize,
        failing: AtomicBool,
    }

    impl MockReadMarkerStore {
        /// Creates an empty mock store.
        pub fn new() -> Self {
            Self {
                markers: Arc::new(RwLock::new(HashMap::new())),
                find_calls: AtomicUsize::new(0),
                upsert_calls: AtomicUsize::new(0),
                failing: AtomicBool::new(false),
            }
        }

        /// Makes every subsequent call fail with `StoreError::Unavailable`.
        pub fn fail_from_now_on(&self) {
            self.failing.store(true, Ordering::SeqCst);
        }

        /// Number of `find` calls observed.
        pub fn find_calls(&self) -> usize {
            self.find_calls.load(Ordering::SeqCst)
        }

        /// Number of `upsert` calls observed.
        pub fn upsert_calls(&self) -> usize {
            self.upsert_calls.load(Ordering::SeqCst)
        }

        /// Number of markers currently stored.
        pub async fn marker_count(&self) -> usize {
            self.markers.read().await.len()
        }

        /// Returns a stored marker, if present.
        pub async fn marker(&self, thread: ThreadId, user: UserId) -> Option<ReadMarker> {
            self.markers.read().await.get(&(thread, user)).cloned()
        }
    }

    impl Default for MockReadMarkerStore {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl ReadMarkerStore for MockReadMarkerStore {
        async fn find(
            &self,
            thread: ThreadId,
            user: UserId,
        ) -> Result<Option<ReadMarker>, StoreError> {
            self.find_calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.load(Ordering::SeqCst) {
                return Err(StoreError::unavailable("mock store offline"));
            }
            Ok(self.markers.read().await.get(&(thread, user)).cloned())
        }

        async fn upsert(
            &self,
            thread: ThreadId,
            user: UserId,
            read_at: DateTime<Utc>,
        ) -> Result<(), StoreError> {
            self.upsert_calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.load(Ordering::SeqCst) {
                return Err(StoreError::unavailable("mock store offline"));
            }
            self.markers
                .write()
                .await
                .insert((thread, user), ReadMarker::new(thread, user, read_at));
            Ok(())
        }
    }
}
