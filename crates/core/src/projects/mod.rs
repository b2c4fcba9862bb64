//! Projects on disk: configuration, discovery and layout.
//!
//! A project is any directory containing the launcher script. This module
//! finds them under a search root and lists the files their icons are built
//! from; it does no classification itself.

pub mod config;
pub mod discovery;
pub mod layout;

pub use config::{ConfigError, ConfigOverrides, LauncherConfig};
pub use discovery::{discover_projects, list_project_files, DiscoveryError, DiscoveryOptions};
pub use layout::Project;
