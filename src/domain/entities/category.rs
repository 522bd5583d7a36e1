//! Forum category entity.
//!
//! Categories are owned by an external collaborator; this crate only needs
//! their identity and title for route building and authorization checks.

use serde::{Deserialize, Serialize};

use crate::domain::slug::slugify;

/// Unique identifier for a forum category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub u64);

impl CategoryId {
    /// Returns the underlying u64 value.
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CategoryId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A forum category grouping threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Category title.
    pub title: String,
}

impl Category {
    /// Creates a new category.
    #[must_use]
    pub fn new(id: impl Into<CategoryId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// Returns the URL slug derived from the title.
    #[must_use]
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }
}
