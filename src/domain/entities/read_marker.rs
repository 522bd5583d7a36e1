//! Per-user read marker entity and read status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ThreadId, UserId};

/// Records the last time a user read a thread.
///
/// Keyed by `(thread_id, user_id)`; the owning store guarantees at most one
/// marker per pair. Created on first read, updated on later reads, never
/// deleted by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadMarker {
    /// Thread the marker belongs to.
    pub thread_id: ThreadId,
    /// User the marker belongs to.
    pub user_id: UserId,
    /// Time of the user's most recent read.
    pub read_at: DateTime<Utc>,
}

impl ReadMarker {
    /// Creates a new read marker.
    #[must_use]
    pub fn new(
        thread_id: impl Into<ThreadId>,
        user_id: impl Into<UserId>,
        read_at: DateTime<Utc>,
    ) -> Self {
        Self {
            thread_id: thread_id.into(),
            user_id: user_id.into(),
            read_at,
        }
    }
}

/// Read status of a thread for a particular viewer.
///
/// Always recomputed from the thread's activity time and the viewer's marker,
/// never cached, so it reflects the latest thread activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadStatus {
    /// The viewer has never read the thread.
    Unread,
    /// The thread received activity since the viewer's last read.
    Updated,
    /// Nothing to flag: read and current, too old to track, or anonymous.
    #[default]
    None,
}

impl ReadStatus {
    /// Returns true for statuses worth surfacing to the viewer.
    #[must_use]
    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Unread | Self::Updated)
    }
}

impl std::fmt::Display for ReadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unread => write!(f, "unread"),
            Self::Updated => write!(f, "updated"),
            Self::None => write!(f, "none"),
        }
    }
}
