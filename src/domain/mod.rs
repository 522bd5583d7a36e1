//! Domain layer with core forum entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Title slug helper.
pub mod slug;

pub use entities::{ReadMarker, ReadStatus, Thread, Viewer};
pub use errors::StoreError;
pub use ports::{AuthorizationPort, ReadMarkerStore, ThreadStore};
