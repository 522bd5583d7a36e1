//! Application layer composing domain ports into services.

/// Service implementations.
pub mod services;

pub use services::{ThreadPresenter, ThreadReadTracker};
