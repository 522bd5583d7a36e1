//! Configuration loading.

mod forum_config;
mod storage;

pub use forum_config::{ForumConfig, PaginationConfig, ThreadConfig};
pub use storage::{ConfigError, config_path_in, default_config_dir, load_config, save_config};
