//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/mvntree/mvntree.toml`
//! 3. Explicit config file passed on the command line
//! 4. Environment variables: `MVNTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::DEFAULT_MARKER;

/// Unified configuration for mvntree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Marker token a report line must carry to be considered (default: `[INFO]`)
    pub marker: String,
    /// Colorize output
    pub color: bool,
    /// Print a separator banner between projects
    pub separators: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            color: true,
            separators: true,
        }
    }
}

/// Get the XDG config directory for mvntree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "mvntree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("mvntree.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a user-supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path().filter(|p| p.exists());
        Self::load_from(global.as_deref(), config_file)
    }

    /// Load settings from the given global and explicit files plus environment.
    pub fn load_from(
        global_file: Option<&Path>,
        config_file: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("marker", defaults.marker)
            .map_err(config_err)?
            .set_default("color", defaults.color)
            .map_err(config_err)?
            .set_default("separators", defaults.separators)
            .map_err(config_err)?;

        if let Some(global) = global_file {
            builder = builder.add_source(File::from(global).required(false));
        }

        if let Some(path) = config_file {
            let path = expand_path(path);
            if !path.is_file() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(Environment::with_prefix("MVNTREE").try_parsing(true));

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;

        if settings.marker.is_empty() {
            return Err(ApplicationError::Config {
                message: "marker must not be empty".to_string(),
            });
        }
        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# mvntree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/mvntree/mvntree.toml
#   File:   --config <path>
#   Env:    MVNTREE_* environment variables (explicit overrides)

# Marker token that prefixes tree lines in the report
marker = "[INFO]"

# Colorize output (NO_COLOR is honoured as well)
color = true

# Print a separator banner between projects
separators = true
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_template_when_parsing_then_matches_defaults() {
        let parsed: Settings = toml::from_str(&Settings::template()).unwrap();
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn given_defaults_when_serializing_then_roundtrips_through_toml() {
        let toml = Settings::default().to_toml().unwrap();
        assert!(toml.contains("marker = \"[INFO]\""));
    }
}
