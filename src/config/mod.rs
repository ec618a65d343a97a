//! Configuration module for bushou
//!
//! This module handles:
//! - Project-level configuration (bushou.toml, .bushourc.json)
//! - User-level fallback configuration (~/.config/bushou/config.toml)
//! - CLI defaults

mod project_config;
mod user_config;

pub use project_config::{
    load_config_file, load_project_config, AnalysisConfig, OutputConfig, ProjectConfig,
    CONFIG_FILE_NAME, EXAMPLE_CONFIG, JSON_CONFIG_FILE_NAME,
};
pub use user_config::user_config_path;
