//! JSON settings files
//!
//! Settings live at `<config dir>/<app>/settings.json`, or wherever the
//! `<APP>_CONFIG` environment variable points. They are read once at
//! startup and never written back.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

const SETTINGS_FILE: &str = "settings.json";

/// Per-app config directory, `.` when the platform has none.
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("app", "canvasfiles", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Name of the environment variable that overrides the settings path.
pub fn override_var(app_name: &str) -> String {
    format!("{}_CONFIG", app_name.to_uppercase().replace('-', "_"))
}

/// Where settings for `app_name` are read from.
pub fn settings_path(app_name: &str) -> PathBuf {
    std::env::var_os(override_var(app_name))
        .map(PathBuf::from)
        .unwrap_or_else(|| config_dir(app_name).join(SETTINGS_FILE))
}

/// Read settings from `path`. A missing file is `Ok(None)`.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&contents)?))
}

/// Read settings for `app_name`, falling back to `T::default()` when the
/// file is missing or unusable.
pub fn load_or_default<T: DeserializeOwned + Default>(app_name: &str) -> T {
    let path = settings_path(app_name);
    match load(&path) {
        Ok(Some(settings)) => {
            tracing::info!(path = %path.display(), "loaded settings");
            settings
        }
        Ok(None) => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            T::default()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable settings");
            T::default()
        }
    }
}
