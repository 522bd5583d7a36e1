//! Forum thread entity.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{CategoryId, ReadMarker, UserId};
use crate::domain::slug::slugify;

/// Unique identifier for a forum thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreadId(pub u64);

impl ThreadId {
    /// Returns the underlying u64 value.
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ThreadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ThreadId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A forum discussion thread.
///
/// `updated_at` is bumped whenever the thread receives activity (an edit or a
/// new reply); read tracking compares it against per-user read markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    /// Thread ID.
    pub id: ThreadId,
    /// Category the thread belongs to.
    pub category_id: CategoryId,
    /// Thread author.
    pub author_id: UserId,
    /// Thread title.
    pub title: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last activity time.
    pub updated_at: DateTime<Utc>,
    /// Locked threads accept no new replies.
    pub locked: bool,
    /// Pinned threads sort above others in listings.
    pub pinned: bool,
    /// Soft-delete marker.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Thread {
    /// Creates a new thread with no activity beyond its creation.
    #[must_use]
    pub fn new(
        id: impl Into<ThreadId>,
        category_id: impl Into<CategoryId>,
        author_id: impl Into<UserId>,
        title: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            category_id: category_id.into(),
            author_id: author_id.into(),
            title: title.into(),
            created_at,
            updated_at: created_at,
            locked: false,
            pinned: false,
            deleted_at: None,
        }
    }

    /// Sets the locked flag.
    #[must_use]
    pub const fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Sets the pinned flag.
    #[must_use]
    pub const fn with_pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    /// Returns true if the thread falls outside the tracking window.
    ///
    /// An unset cutoff disables tracking, so every thread counts as old.
    #[must_use]
    pub fn is_old(&self, now: DateTime<Utc>, cutoff: Option<Duration>) -> bool {
        match cutoff {
            None => true,
            Some(cutoff) => self.updated_at < now - cutoff,
        }
    }

    /// Returns true if the thread has received activity since the marker's
    /// recorded read time.
    #[must_use]
    pub fn updated_since(&self, marker: &ReadMarker) -> bool {
        self.updated_at > marker.read_at
    }

    /// Records activity on the thread.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    /// Returns true if the thread is soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns the URL slug derived from the title.
    #[must_use]
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn thread_updated_days_ago(days: i64, now: DateTime<Utc>) -> Thread {
        let mut thread = Thread::new(1, 1, 1, "Welcome", now - Duration::days(days));
        thread.updated_at = now - Duration::days(days);
        thread
    }

    #[test_case(None, 1, true; "unset cutoff disables tracking")]
    #[test_case(Some(14), 20, true; "older than cutoff")]
    #[test_case(Some(14), 3, false; "inside cutoff window")]
    #[test_case(Some(14), 14, false; "exactly at cutoff boundary")]
    fn is_old(cutoff_days: Option<i64>, age_days: i64, expected: bool) {
        let now = Utc::now();
        let thread = thread_updated_days_ago(age_days, now);
        let cutoff = cutoff_days.map(Duration::days);

        assert_eq!(thread.is_old(now, cutoff), expected);
    }

    #[test]
    fn touch_bumps_updated_at() {
        let now = Utc::now();
        let mut thread = Thread::new(1, 1, 1, "Welcome", now);
        let later = now + Duration::hours(2);

        thread.touch(later);

        assert_eq!(thread.updated_at, later);
        assert_eq!(thread.created_at, now);
    }

    #[test]
    fn updated_since_compares_marker_timestamp() {
        let now = Utc::now();
        let mut thread = Thread::new(1, 1, 1, "Welcome", now);
        let marker = ReadMarker::new(thread.id, UserId(7), now);

        assert!(!thread.updated_since(&marker));

        thread.touch(now + Duration::minutes(5));
        assert!(thread.updated_since(&marker));
    }

    #[test]
    fn slug_derives_from_title() {
        let thread = Thread::new(1, 1, 1, "Hello, World!", Utc::now());
        assert_eq!(thread.slug(), "hello-world");
    }
}
