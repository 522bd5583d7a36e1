//! Application service implementations.

mod read_tracker;
mod thread_presenter;

pub use read_tracker::ThreadReadTracker;
pub use thread_presenter::{RouteComponents, ThreadPresenter};
