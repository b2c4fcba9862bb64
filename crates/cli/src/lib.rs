use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use launchpad_core::projects::{ConfigOverrides, LauncherConfig};

pub mod commands;

/// Canonicalize a user-supplied directory if possible, falling back to the
/// given string relative to the current working directory.
pub fn canonicalize_or_current(root: &str) -> Result<PathBuf> {
    let path = Path::new(root);
    if path == Path::new(".") {
        Ok(env::current_dir().context("Failed to get current directory")?)
    } else {
        // Missing paths are still made absolute so error messages show where we looked.
        match path.canonicalize() {
            Ok(p) => Ok(p),
            Err(_) => {
                let cwd = env::current_dir().context("Failed to get current directory")?;
                Ok(cwd.join(path))
            }
        }
    }
}

/// Set up `env_logger` on stderr.
///
/// `RUST_LOG` is respected; `--verbose` and `--quiet` override it.
pub fn init_logging(verbose: bool, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    // Tests call this repeatedly in one process.
    let _ = builder.target(env_logger::Target::Stderr).try_init();
}

/// Effective configuration plus the file it came from, if any.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: LauncherConfig,
    pub source: Option<PathBuf>,
}

/// Load the config file (explicit path or the default location) and apply CLI overrides.
///
/// An explicit path must exist; the default location is optional.
pub fn load_config(explicit: Option<&Path>, overrides: ConfigOverrides) -> Result<LoadedConfig> {
    let (mut config, source) = match explicit {
        Some(path) => {
            let config = LauncherConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            (config, Some(path.to_path_buf()))
        }
        None => match LauncherConfig::default_path() {
            Some(path) if path.is_file() => {
                let config = LauncherConfig::load(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?;
                (config, Some(path))
            }
            _ => (LauncherConfig::default(), None),
        },
    };
    config.apply_overrides(overrides);
    log::debug!("effective config: {:?}", config);
    Ok(LoadedConfig { config, source })
}
