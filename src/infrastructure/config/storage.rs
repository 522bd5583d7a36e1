//! Forum preference persistence.
//!
//! Preferences live in a single `forum.toml`. A missing file is seeded with
//! defaults and a malformed one falls back to defaults with a warning, so a
//! bad preferences file never takes the forum down with it.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::{info, warn};

use super::forum_config::ForumConfig;

const APP_QUALIFIER: &str = "org";
const APP_ORGANIZATION: &str = "threadmark";
const APP_NAME: &str = "threadmark";
const CONFIG_FILE_NAME: &str = "forum.toml";

/// Preference persistence errors.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("toml deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

/// Returns the platform directory holding `forum.toml`.
///
/// # Errors
/// Returns `ConfigError::ConfigDirNotFound` when the platform provides no
/// home directory to derive it from.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(ConfigError::ConfigDirNotFound)
}

/// Returns the preference file path inside `dir`.
#[must_use]
pub fn config_path_in(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Loads the forum preferences from `dir`, or from `path_override` when set.
///
/// A missing file is created with default preferences; an unparseable file
/// is left untouched and defaults are returned.
///
/// # Errors
/// Returns `ConfigError` when the file or the seeded defaults cannot be
/// read or written.
pub fn load_config(dir: &Path, path_override: Option<&Path>) -> Result<ForumConfig, ConfigError> {
    let config_path = path_override.map_or_else(|| config_path_in(dir), Path::to_path_buf);

    if !config_path.exists() {
        info!(path = ?config_path, "No forum preferences found, seeding defaults");
        let defaults = ForumConfig::default();
        write_atomically(&config_path, &defaults)?;
        return Ok(defaults);
    }

    let content = fs::read_to_string(&config_path)?;
    match toml::from_str::<ForumConfig>(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            warn!(error = %e, "Unparseable forum preferences, falling back to defaults");
            Ok(ForumConfig::default())
        }
    }
}

/// Saves the forum preferences into `dir`, replacing any existing file.
///
/// # Errors
/// Returns `ConfigError` when the file cannot be written.
pub fn save_config(dir: &Path, config: &ForumConfig) -> Result<(), ConfigError> {
    write_atomically(&config_path_in(dir), config)
}

// Write-then-rename so readers never observe a half-written file.
fn write_atomically(path: &Path, config: &ForumConfig) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(config)?;

    let parent = path
        .parent()
        .ok_or_else(|| std::io::Error::other("config path has no parent"))?;
    fs::create_dir_all(parent)?;

    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.persist(path).map_err(|e| e.error)?;

    Ok(())
}
