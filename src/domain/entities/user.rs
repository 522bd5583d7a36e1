//! Forum user identity.

use serde::{Deserialize, Serialize};

/// Unique identifier for a forum user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub u64);

impl UserId {
    /// Returns the underlying u64 value.
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// The acting user for a read-tracking operation.
///
/// Every operation takes the viewer explicitly instead of consulting ambient
/// session state; anonymous callers never touch the read-marker store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Viewer {
    /// Unauthenticated visitor.
    #[default]
    Anonymous,
    /// Authenticated user.
    User(UserId),
}

impl Viewer {
    /// Returns the user ID for an authenticated viewer.
    #[must_use]
    pub const fn user_id(&self) -> Option<UserId> {
        match self {
            Self::Anonymous => None,
            Self::User(id) => Some(*id),
        }
    }

    /// Returns true if the viewer is authenticated.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::User(_))
    }
}

impl From<UserId> for Viewer {
    fn from(value: UserId) -> Self {
        Self::User(value)
    }
}
