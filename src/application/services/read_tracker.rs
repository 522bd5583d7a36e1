//! Per-user thread read-state tracking.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::domain::entities::{ReadStatus, Thread, Viewer};
use crate::domain::errors::StoreError;
use crate::domain::ports::{AuthorizationPort, ReadMarkerStore};

/// Tracks whether threads are unread or updated for individual users.
///
/// Status is recomputed on every call from the thread's activity time and the
/// viewer's read marker; nothing is cached. The only mutation is
/// [`mark_read`](Self::mark_read), which moves a `(thread, user)` pair toward
/// freshly read.
#[derive(Clone)]
pub struct ThreadReadTracker {
    markers: Arc<dyn ReadMarkerStore>,
    authorization: Arc<dyn AuthorizationPort>,
}

impl ThreadReadTracker {
    /// Creates a new tracker.
    #[must_use]
    pub fn new(
        markers: Arc<dyn ReadMarkerStore>,
        authorization: Arc<dyn AuthorizationPort>,
    ) -> Self {
        Self {
            markers,
            authorization,
        }
    }

    /// Returns true if the thread falls outside the tracking window.
    #[must_use]
    pub fn is_old(thread: &Thread, now: DateTime<Utc>, cutoff: Option<Duration>) -> bool {
        thread.is_old(now, cutoff)
    }

    /// Computes the thread's read status for a viewer.
    ///
    /// Anonymous viewers always get [`ReadStatus::None`] without any store
    /// access, as do threads outside the tracking window.
    ///
    /// # Errors
    /// Returns an error if the marker lookup fails.
    pub async fn read_status(
        &self,
        thread: &Thread,
        viewer: &Viewer,
        now: DateTime<Utc>,
        cutoff: Option<Duration>,
    ) -> Result<ReadStatus, StoreError> {
        let Some(user_id) = viewer.user_id() else {
            return Ok(ReadStatus::None);
        };

        if thread.is_old(now, cutoff) {
            return Ok(ReadStatus::None);
        }

        match self.markers.find(thread.id, user_id).await? {
            None => Ok(ReadStatus::Unread),
            Some(marker) if thread.updated_since(&marker) => Ok(ReadStatus::Updated),
            Some(_) => Ok(ReadStatus::None),
        }
    }

    /// Records that the viewer has read the thread.
    ///
    /// No-op for anonymous viewers, for threads outside the tracking window,
    /// and when the existing marker already covers the thread's latest
    /// activity. Performs at most one store write and leaves at most one
    /// marker per `(thread, user)` pair.
    ///
    /// # Errors
    /// Returns an error if the marker lookup or write fails; on failure no
    /// marker is created or updated.
    pub async fn mark_read(
        &self,
        thread: &Thread,
        viewer: &Viewer,
        now: DateTime<Utc>,
        cutoff: Option<Duration>,
    ) -> Result<(), StoreError> {
        let Some(user_id) = viewer.user_id() else {
            return Ok(());
        };

        if thread.is_old(now, cutoff) {
            debug!(thread_id = %thread.id, "Thread outside tracking window, skipping mark");
            return Ok(());
        }

        match self.markers.find(thread.id, user_id).await? {
            None => {
                self.markers.upsert(thread.id, user_id, now).await?;
                debug!(thread_id = %thread.id, user_id = %user_id, "Read marker created");
            }
            Some(marker) if thread.updated_since(&marker) => {
                self.markers.upsert(thread.id, user_id, now).await?;
                debug!(thread_id = %thread.id, user_id = %user_id, "Read marker touched");
            }
            Some(_) => {} // no activity since last read, nothing to write
        }

        Ok(())
    }

    /// Filters recent candidate threads down to those worth surfacing.
    ///
    /// `candidates` must already be restricted to threads updated inside the
    /// tracking window, newest first (see `ThreadStore::updated_after`); the
    /// result preserves that order. Authenticated viewers keep only unread or
    /// updated threads; anonymous viewers have no markers, so every candidate
    /// passes the read filter. Either way, threads in categories the viewer
    /// may not view are dropped.
    ///
    /// # Errors
    /// Returns an error if any marker lookup fails.
    pub async fn recent_unread_for(
        &self,
        viewer: &Viewer,
        candidates: Vec<Thread>,
        now: DateTime<Utc>,
        cutoff: Option<Duration>,
    ) -> Result<Vec<Thread>, StoreError> {
        let mut fresh = Vec::new();

        for thread in candidates {
            if viewer.is_authenticated() {
                let status = self.read_status(&thread, viewer, now, cutoff).await?;
                if !status.is_flagged() {
                    continue;
                }
            }

            if !self.authorization.can_view(viewer, thread.category_id).await {
                continue;
            }

            fresh.push(thread);
        }

        Ok(fresh)
    }
}
