use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::config::EditorConfig;

/// Config file looked up next to the note when `--config` is not given
pub const CONFIG_FILE: &str = "tasknote.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Default config location for a note file
pub fn default_config_path(note_path: &Path) -> PathBuf {
    note_path
        .parent()
        .unwrap_or(Path::new("."))
        .join(CONFIG_FILE)
}

/// Read the editor config. A missing file means defaults; missing fields
/// fall back to their defaults one by one.
pub fn read_config(path: &Path) -> Result<EditorConfig, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(EditorConfig::default());
        }
        Err(e) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    toml::from_str(&text).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
