//! Authorization port definition.

use async_trait::async_trait;

use crate::domain::entities::{CategoryId, Viewer};

/// Port deciding whether a viewer may see a category.
///
/// Permission rules live entirely with the collaborator behind this port.
#[async_trait]
pub trait AuthorizationPort: Send + Sync {
    /// Returns true if the viewer may view threads in the category.
    async fn can_view(&self, viewer: &Viewer, category: CategoryId) -> bool;
}
