use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::projects::discovery::DiscoveryOptions;

/// Launcher script looked for when none is configured.
pub const DEFAULT_LAUNCHER_SCRIPT: &str = "start-session.sh";

/// Directory under `$HOME` searched when no root is configured.
pub const DEFAULT_PROJECTS_DIR: &str = "Projects";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("Failed to parse config at {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Only `.yaml`, `.yml` and `.json` files are understood.
    #[error("Unsupported config format for {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("No projects root configured and no home directory found")]
    MissingHome,
}

/// User configuration for discovery and launching.
///
/// Lives (by default) at `<config dir>/launchpad/config.yaml`. Every field is
/// optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Directory searched for projects. Defaults to `~/Projects`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// File name that marks a project directory.
    pub launcher_script: String,
    /// Program used to run the launcher script.
    pub shell: String,
    /// Directory names never descended into.
    pub skip_dirs: Vec<String>,
    /// Skip directories whose name starts with `.`.
    pub skip_hidden: bool,
    /// Colourize icon lines.
    pub color: bool,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            root: None,
            launcher_script: DEFAULT_LAUNCHER_SCRIPT.to_string(),
            shell: "bash".to_string(),
            skip_dirs: vec!["node_modules".to_string()],
            skip_hidden: true,
            color: true,
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub root: Option<PathBuf>,
    pub launcher_script: Option<String>,
    pub shell: Option<String>,
    pub no_color: bool,
}

impl LauncherConfig {
    /// Default config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("launchpad").join("config.yaml"))
    }

    /// Load a config file, choosing YAML or JSON by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        if !matches!(ext, "yaml" | "yml" | "json") {
            return Err(ConfigError::UnsupportedFormat(path.to_path_buf()));
        }

        let body = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let parsed: Result<Self, String> = if ext == "json" {
            serde_json::from_str(&body).map_err(|e| e.to_string())
        } else if body.trim().is_empty() {
            Ok(Self::default())
        } else {
            serde_yaml::from_str(&body).map_err(|e| e.to_string())
        };
        parsed.map_err(|message| ConfigError::Parse { path: path.to_path_buf(), message })
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.is_file() {
            Self::load(path)
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(root) = overrides.root {
            self.root = Some(root);
        }
        if let Some(script) = overrides.launcher_script {
            self.launcher_script = script;
        }
        if let Some(shell) = overrides.shell {
            self.shell = shell;
        }
        if overrides.no_color {
            self.color = false;
        }
    }

    /// Configured root, or `~/Projects`.
    pub fn resolved_root(&self) -> Result<PathBuf, ConfigError> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => dirs::home_dir()
                .map(|home| home.join(DEFAULT_PROJECTS_DIR))
                .ok_or(ConfigError::MissingHome),
        }
    }

    pub fn discovery_options(&self) -> DiscoveryOptions {
        DiscoveryOptions {
            launcher_script: self.launcher_script.clone(),
            skip_dirs: self.skip_dirs.clone(),
            skip_hidden: self.skip_hidden,
        }
    }
}
