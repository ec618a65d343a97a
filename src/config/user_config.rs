//! User-level configuration for bushou
//!
//! `~/.config/bushou/config.toml` uses the project config format and applies
//! when the working directory has no project config of its own.

use super::project_config::{load_toml_config, ProjectConfig};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Get the user config file path
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("bushou").join("config.toml"))
}

/// Load the user config at `path`, if it exists and parses.
pub(super) fn load_user_config(path: &Path) -> Option<ProjectConfig> {
    if !path.exists() {
        return None;
    }
    match load_toml_config(path) {
        Ok(config) => {
            debug!("Loaded user config from {}", path.display());
            let base = path.parent().map(PathBuf::from).unwrap_or_default();
            Some(config.relative_to(&base))
        }
        Err(e) => {
            warn!("Failed to load {}: {}", path.display(), e);
            None
        }
    }
}
