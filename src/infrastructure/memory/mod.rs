//! In-memory reference adapters for the domain ports.
//!
//! Suitable for tests and single-process embedding; a real deployment would
//! put a database behind the same ports.

mod read_marker_store;
mod thread_store;

pub use read_marker_store::MemoryReadMarkerStore;
pub use thread_store::MemoryThreadStore;
