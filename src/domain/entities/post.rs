//! Forum post entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ThreadId, UserId};

/// Unique identifier for a forum post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub u64);

impl PostId {
    /// Returns the underlying u64 value.
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PostId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A single post inside a thread.
///
/// The first post of a thread is its opening post; later posts are replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post ID.
    pub id: PostId,
    /// Thread the post belongs to.
    pub thread_id: ThreadId,
    /// Post author.
    pub author_id: UserId,
    /// Post body.
    pub body: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last edit time.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Creates a new post.
    #[must_use]
    pub fn new(
        id: impl Into<PostId>,
        thread_id: impl Into<ThreadId>,
        author_id: impl Into<UserId>,
        body: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            thread_id: thread_id.into(),
            author_id: author_id.into(),
            body: body.into(),
            created_at,
            updated_at: created_at,
            deleted_at: None,
        }
    }

    /// Returns true if the post is soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
