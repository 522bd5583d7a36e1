//! Forum configuration.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Forum preferences loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumConfig {
    /// Thread tracking preferences.
    #[serde(default)]
    pub thread: ThreadConfig,

    /// Pagination preferences.
    #[serde(default)]
    pub pagination: PaginationConfig,
}

/// Thread tracking preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadConfig {
    /// Age in days beyond which threads drop out of unread tracking.
    /// Zero disables tracking entirely.
    #[serde(default = "default_cutoff_age_days")]
    pub cutoff_age_days: u32,
}

impl ThreadConfig {
    /// Returns the tracking cutoff, or `None` when tracking is disabled.
    #[must_use]
    pub fn cutoff(&self) -> Option<Duration> {
        match self.cutoff_age_days {
            0 => None,
            days => Some(Duration::days(i64::from(days))),
        }
    }
}

impl Default for ThreadConfig {
    fn default() -> Self {
        Self {
            cutoff_age_days: default_cutoff_age_days(),
        }
    }
}

/// Pagination preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Threads listed per category page.
    #[serde(default = "default_per_page")]
    pub threads_per_page: u64,

    /// Posts listed per thread page.
    #[serde(default = "default_per_page")]
    pub posts_per_page: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            threads_per_page: default_per_page(),
            posts_per_page: default_per_page(),
        }
    }
}

fn default_cutoff_age_days() -> u32 {
    14
}

fn default_per_page() -> u64 {
    20
}
