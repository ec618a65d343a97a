//! Project-level configuration support
//!
//! Loads per-project configuration from `bushou.toml` or `.bushourc.json`
//! in the working directory.
//!
//! # Configuration Format
//!
//! ```toml
//! # bushou.toml
//!
//! [analysis]
//! window_size = 5
//! min_observed = 5
//! significance_threshold = 3.84
//! top_n = 20
//! examples_per_pair = 5
//! dictionary = "radicals.toml"
//!
//! [output]
//! format = "text"
//! export_dir = "output"
//! ```

use crate::pipeline::AnalysisOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Preferred project config file name
pub const CONFIG_FILE_NAME: &str = "bushou.toml";
/// Alternate JSON config file name
pub const JSON_CONFIG_FILE_NAME: &str = ".bushourc.json";

/// Configuration template written by `bushou init`
pub const EXAMPLE_CONFIG: &str = r#"# bushou project configuration
#
# Command-line flags take precedence over these values.

[analysis]
# Maximum distance, in characters, at which two radicals co-occur
window_size = 5

# Pairs seen fewer times than this are not scored
min_observed = 5

# Chi-square cutoff for flagging a pair as significant (1 d.o.f., p < 0.05)
significance_threshold = 3.84

# Rows shown per table in text and markdown reports
top_n = 20

# Example character pairs kept per top pair
examples_per_pair = 5

# Extra or replacement radical dictionary
# dictionary = "radicals.toml"

[output]
# text, json or markdown
format = "text"

# Write CSV artifacts here on every analyze run
# export_dir = "output"
"#;

/// Project-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// `[analysis]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub window_size: usize,
    pub min_observed: u32,
    pub significance_threshold: f64,
    pub top_n: usize,
    pub examples_per_pair: usize,
    /// Dictionary file layered over the built-in tables
    pub dictionary: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let defaults = AnalysisOptions::default();
        Self {
            window_size: defaults.window_size,
            min_observed: defaults.min_observed,
            significance_threshold: defaults.significance_threshold,
            top_n: defaults.top_n,
            examples_per_pair: defaults.examples_per_pair,
            dictionary: None,
        }
    }
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: String,
    pub export_dir: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            export_dir: None,
        }
    }
}

impl ProjectConfig {
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            window_size: self.analysis.window_size,
            min_observed: self.analysis.min_observed,
            significance_threshold: self.analysis.significance_threshold,
            top_n: self.analysis.top_n,
            examples_per_pair: self.analysis.examples_per_pair,
        }
    }

    /// Resolve relative paths in the config against `base`, the directory
    /// holding the config file.
    pub(super) fn relative_to(mut self, base: &Path) -> Self {
        if let Some(dictionary) = self.analysis.dictionary.take() {
            self.analysis.dictionary = Some(base.join(dictionary));
        }
        if let Some(export_dir) = self.output.export_dir.take() {
            self.output.export_dir = Some(base.join(export_dir));
        }
        self
    }
}

/// Load project configuration from `dir`.
///
/// Tries `bushou.toml` then `.bushourc.json`, then the user config. A file
/// that fails to parse is reported and skipped; with nothing usable the
/// defaults apply.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    discover(dir, super::user_config_path().as_deref())
}

/// Discovery with the user config location passed in; `None` skips it.
fn discover(dir: &Path, user_config: Option<&Path>) -> ProjectConfig {
    // Try TOML first (preferred format)
    let toml_path = dir.join(CONFIG_FILE_NAME);
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", toml_path.display());
                return config.relative_to(dir);
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    // Try JSON
    let json_path = dir.join(JSON_CONFIG_FILE_NAME);
    if json_path.exists() {
        match load_json_config(&json_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", json_path.display());
                return config.relative_to(dir);
            }
            Err(e) => {
                warn!("Failed to load {}: {}", json_path.display(), e);
            }
        }
    }

    if let Some(config) = user_config.and_then(super::user_config::load_user_config) {
        return config;
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

/// Load an explicitly named config file. The format follows the extension.
/// A file that cannot be parsed is reported and replaced by the defaults;
/// a missing file is an error.
pub fn load_config_file(path: &Path) -> anyhow::Result<ProjectConfig> {
    if !path.exists() {
        anyhow::bail!("Config file not found: {}", path.display());
    }
    let is_json = path.extension().is_some_and(|ext| ext == "json");
    let loaded = if is_json {
        load_json_config(path)
    } else {
        load_toml_config(path)
    };
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    match loaded {
        Ok(config) => {
            debug!("Loaded config from {}", path.display());
            Ok(config.relative_to(base))
        }
        Err(e) => {
            warn!("Failed to load {}: {}", path.display(), e);
            Ok(ProjectConfig::default())
        }
    }
}

/// Load configuration from a TOML file
pub(super) fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Load configuration from a JSON file
fn load_json_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_analysis_defaults() {
        let config = ProjectConfig::default();
        assert_eq!(config.analysis_options(), AnalysisOptions::default());
        assert_eq!(config.output.format, "text");
        assert!(config.analysis.dictionary.is_none());
    }

    #[test]
    fn test_example_config_parses() {
        let config: ProjectConfig = toml::from_str(EXAMPLE_CONFIG).expect("parse template");
        assert_eq!(config, ProjectConfig::default());
    }

    #[test]
    fn test_load_toml_config() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"
[analysis]
window_size = 3
dictionary = "radicals.toml"

[output]
format = "json"
"#,
        )
        .unwrap();

        let config = discover(dir.path(), None);
        assert_eq!(config.analysis.window_size, 3);
        assert_eq!(config.analysis.min_observed, 5);
        assert_eq!(config.output.format, "json");
        assert_eq!(
            config.analysis.dictionary,
            Some(dir.path().join("radicals.toml"))
        );
    }

    #[test]
    fn test_load_json_config() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(JSON_CONFIG_FILE_NAME),
            r#"{"analysis": {"top_n": 7, "significance_threshold": 6.63}}"#,
        )
        .unwrap();

        let config = discover(dir.path(), None);
        assert_eq!(config.analysis.top_n, 7);
        assert_eq!(config.analysis.significance_threshold, 6.63);
    }

    #[test]
    fn test_toml_takes_precedence_over_json() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "[analysis]\ntop_n = 3\n").unwrap();
        fs::write(
            dir.path().join(JSON_CONFIG_FILE_NAME),
            r#"{"analysis": {"top_n": 9}}"#,
        )
        .unwrap();
        assert_eq!(discover(dir.path(), None).analysis.top_n, 3);
    }

    #[test]
    fn test_malformed_toml_falls_through_to_json() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "[analysis\nwindow_size = ").unwrap();
        fs::write(
            dir.path().join(JSON_CONFIG_FILE_NAME),
            r#"{"analysis": {"window_size": 2}}"#,
        )
        .unwrap();
        assert_eq!(discover(dir.path(), None).analysis.window_size, 2);
    }

    #[test]
    fn test_user_config_applies_without_project_config() {
        let dir = tempdir().unwrap();
        let home = tempdir().unwrap();
        let user = home.path().join("config.toml");
        fs::write(&user, "[analysis]\nwindow_size = 8\n").unwrap();

        assert_eq!(discover(dir.path(), Some(&user)).analysis.window_size, 8);
        assert_eq!(discover(dir.path(), None), ProjectConfig::default());

        // A project config shadows the user config entirely
        fs::write(dir.path().join(CONFIG_FILE_NAME), "[output]\nformat = \"json\"\n").unwrap();
        let config = discover(dir.path(), Some(&user));
        assert_eq!(config.analysis.window_size, 5);
        assert_eq!(config.output.format, "json");
    }

    #[test]
    fn test_explicit_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[output]\nexport_dir = \"csv\"\n").unwrap();
        let config = load_config_file(&path).unwrap();
        assert_eq!(config.output.export_dir, Some(dir.path().join("csv")));

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{not json").unwrap();
        assert_eq!(load_config_file(&bad).unwrap(), ProjectConfig::default());

        assert!(load_config_file(&dir.path().join("missing.toml")).is_err());
    }
}
