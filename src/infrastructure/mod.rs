//! Infrastructure layer containing adapters for external concerns.

/// Configuration loading.
pub mod config;
/// In-memory reference adapters for the domain ports.
pub mod memory;
