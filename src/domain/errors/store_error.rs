//! Store error types.

use thiserror::Error;

/// Store-layer error surfaced by the ports.
///
/// Anonymous access is not an error; it yields a defined `ReadStatus::None`.
/// A store failure is distinct from that status so callers can choose to
/// degrade (omit the unread flag) or report it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not serve the request.
    #[error("store unavailable: {message}")]
    Unavailable {
        /// Description of the underlying failure.
        message: String,
    },
}

impl StoreError {
    /// Creates a store-unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}
