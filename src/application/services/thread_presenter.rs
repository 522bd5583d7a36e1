//! Computed display attributes for threads.
//!
//! Routes, pagination and last-post info are derived on demand from the
//! thread store; nothing here is persisted.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::{Category, Post, Thread, ThreadId};
use crate::domain::errors::StoreError;
use crate::domain::ports::ThreadStore;

/// Components used to construct a thread's routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteComponents {
    /// Category ID.
    pub category_id: u64,
    /// Slug of the category title.
    pub category_slug: String,
    /// Thread ID.
    pub thread_id: u64,
    /// Slug of the thread title.
    pub thread_slug: String,
}

/// Derives a thread's display attributes from the thread store.
#[derive(Clone)]
pub struct ThreadPresenter {
    threads: Arc<dyn ThreadStore>,
    posts_per_page: u64,
}

impl ThreadPresenter {
    /// Creates a new presenter paginating posts at `posts_per_page`.
    #[must_use]
    pub fn new(threads: Arc<dyn ThreadStore>, posts_per_page: u64) -> Self {
        Self {
            threads,
            posts_per_page: posts_per_page.max(1),
        }
    }

    /// Returns the components used to construct the thread's routes.
    #[must_use]
    pub fn route_components(thread: &Thread, category: &Category) -> RouteComponents {
        RouteComponents {
            category_id: category.id.as_u64(),
            category_slug: category.slug(),
            thread_id: thread.id.as_u64(),
            thread_slug: thread.slug(),
        }
    }

    /// Returns the thread's show route.
    #[must_use]
    pub fn show_route(thread: &Thread, category: &Category) -> String {
        let components = Self::route_components(thread, category);
        format!(
            "/forum/{}/{}",
            join_id_slug(components.category_id, &components.category_slug),
            join_id_slug(components.thread_id, &components.thread_slug),
        )
    }

    /// Returns the route for posting a reply.
    #[must_use]
    pub fn reply_route(thread: &Thread, category: &Category) -> String {
        format!("{}/reply", Self::show_route(thread, category))
    }

    /// Returns the API route for updating the thread (PATCH).
    #[must_use]
    pub fn update_route(thread: &Thread) -> String {
        format!("/api/v1/threads/{}", thread.id)
    }

    /// Returns the API route for soft-deleting the thread (DELETE).
    #[must_use]
    pub fn delete_route(thread: &Thread) -> String {
        format!("/api/v1/threads/{}", thread.id)
    }

    /// Returns the API route for permanently deleting the thread (DELETE).
    #[must_use]
    pub fn force_delete_route(thread: &Thread) -> String {
        format!("/api/v1/threads/{}?force=1", thread.id)
    }

    /// Returns the API route for restoring a soft-deleted thread.
    #[must_use]
    pub fn restore_route(thread: &Thread) -> String {
        format!("/api/v1/threads/{}/restore", thread.id)
    }

    /// Counts the replies in the thread, i.e. every post after the opener.
    ///
    /// Assumes the first post is the thread-opening post. Saturates at zero
    /// so a thread whose opener was removed does not report a negative count.
    ///
    /// # Errors
    /// Returns an error if the post count query fails.
    pub async fn reply_count(&self, thread: ThreadId) -> Result<u64, StoreError> {
        Ok(self.threads.post_count(thread).await?.saturating_sub(1))
    }

    /// Returns the number of the last page of posts, at least 1.
    ///
    /// # Errors
    /// Returns an error if the post count query fails.
    pub async fn last_page(&self, thread: ThreadId) -> Result<u64, StoreError> {
        let posts = self.threads.post_count(thread).await?;
        Ok(posts.div_ceil(self.posts_per_page).max(1))
    }

    /// Returns the most recent post in the thread.
    ///
    /// # Errors
    /// Returns an error if the post query fails.
    pub async fn last_post(&self, thread: ThreadId) -> Result<Option<Post>, StoreError> {
        self.threads.last_post(thread).await
    }

    /// Returns the creation time of the most recent post.
    ///
    /// # Errors
    /// Returns an error if the post query fails.
    pub async fn last_post_time(
        &self,
        thread: ThreadId,
    ) -> Result<Option<DateTime<Utc>>, StoreError> {
        Ok(self.last_post(thread).await?.map(|post| post.created_at))
    }

    /// Returns a URL pointing at the thread's most recent post.
    ///
    /// # Errors
    /// Returns an error if the post queries fail.
    pub async fn last_post_url(
        &self,
        thread: &Thread,
        category: &Category,
    ) -> Result<Option<String>, StoreError> {
        let Some(post) = self.last_post(thread.id).await? else {
            return Ok(None);
        };
        let page = self.last_page(thread.id).await?;

        Ok(Some(format!(
            "{}?page={page}#post-{}",
            Self::show_route(thread, category),
            post.id,
        )))
    }
}

fn join_id_slug(id: u64, slug: &str) -> String {
    if slug.is_empty() {
        id.to_string()
    } else {
        format!("{id}-{slug}")
    }
}
