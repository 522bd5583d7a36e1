//! Domain entity definitions.

mod category;
mod post;
mod read_marker;
mod thread;
mod user;

pub use category::{Category, CategoryId};
pub use post::{Post, PostId};
pub use read_marker::{ReadMarker, ReadStatus};
pub use thread::{Thread, ThreadId};
pub use user::{UserId, Viewer};
