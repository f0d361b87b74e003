// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of user preferences in a `settings.toml` file.
//!
//! The file lives in the platform config directory. A missing file is
//! not an error (defaults apply); an unreadable or malformed file also
//! degrades to defaults, but `load` reports it so the application can
//! surface a warning toast on startup.

mod defaults;

pub use defaults::{DEFAULT_KEYBOARD_OFFSET, DEFAULT_VISIBILITY_TIME_MS};

use crate::error::Result;
use crate::ui::toast::{ToastKind, ToastPosition};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToasts";

/// Fluent key for the warning shown when the settings file cannot be read.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub toast: ToastConfig,
}

/// Mount-time defaults for the toast hosts, all optional in the file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ToastConfig {
    /// Visible duration before auto-hide, in milliseconds.
    pub visibility_time_ms: Option<u64>,
    /// Window edge toasts anchor to when a request does not choose one.
    pub position: Option<ToastPosition>,
    /// Kind applied to requests that do not choose one.
    pub default_kind: Option<ToastKind>,
    /// Offset above the bottom edge, in logical pixels.
    pub keyboard_offset: Option<f32>,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration, reporting a warning key when an existing
/// settings file could not be read or parsed.
pub fn load() -> (Config, Option<String>) {
    let Some(path) = get_default_config_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string())),
    }
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
