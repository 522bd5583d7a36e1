//! Port definitions.

mod authorization_port;
mod read_marker_store_port;
mod thread_store_port;

pub use authorization_port::AuthorizationPort;
pub use read_marker_store_port::ReadMarkerStore;
pub use thread_store_port::ThreadStore;

#[cfg(test)]
pub use authorization_port::mock::MockAuthorization;
#[cfg(test)]
pub use read_marker_store_port::mock::MockReadMarkerStore;
