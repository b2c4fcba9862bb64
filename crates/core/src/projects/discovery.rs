use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use crate::projects::config::DEFAULT_LAUNCHER_SCRIPT;
use crate::projects::layout::Project;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Projects root does not exist or is not a directory: {0}")]
    MissingRoot(PathBuf),

    #[error("Failed to walk {path}: {source}")]
    Walk { path: PathBuf, source: walkdir::Error },
}

/// What counts as a project and which directories are pruned while walking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOptions {
    pub launcher_script: String,
    pub skip_dirs: Vec<String>,
    pub skip_hidden: bool,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            launcher_script: DEFAULT_LAUNCHER_SCRIPT.to_string(),
            skip_dirs: vec!["node_modules".to_string()],
            skip_hidden: true,
        }
    }
}

impl DiscoveryOptions {
    /// Whether a directory below the walk root should be skipped entirely.
    fn prunes(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        (self.skip_hidden && name.starts_with('.')) || self.skip_dirs.iter().any(|d| *d == name)
    }

    fn walk<'a>(
        &'a self,
        root: &Path,
    ) -> impl Iterator<Item = Result<DirEntry, DiscoveryError>> + 'a {
        let root_buf = root.to_path_buf();
        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| !self.prunes(entry))
            .map(move |entry| {
                entry.map_err(|source| DiscoveryError::Walk {
                    path: source.path().map(Path::to_path_buf).unwrap_or_else(|| root_buf.clone()),
                    source,
                })
            })
    }
}

/// Find every project (directory holding the launcher script) under `root`.
///
/// Results are in file-name order of the walk.
pub fn discover_projects(
    root: impl AsRef<Path>,
    options: &DiscoveryOptions,
) -> Result<Vec<Project>, DiscoveryError> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(DiscoveryError::MissingRoot(root.to_path_buf()));
    }

    let mut projects = Vec::new();
    for entry in options.walk(root) {
        let entry = entry?;
        if entry.file_type().is_file() && entry.file_name() == options.launcher_script.as_str() {
            let project = Project::from_script(root, entry.path());
            log::debug!("found project {} ({})", project.label, project.script.display());
            projects.push(project);
        }
    }

    log::info!("Found {} project(s) under {}", projects.len(), root.display());
    Ok(projects)
}

/// Regular files of one project, with hidden and vendored directories pruned.
///
/// Hidden files themselves are kept (e.g. `.gitignore`).
pub fn list_project_files(
    project_root: impl AsRef<Path>,
    options: &DiscoveryOptions,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    let project_root = project_root.as_ref();
    if !project_root.is_dir() {
        return Err(DiscoveryError::MissingRoot(project_root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in options.walk(project_root) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    log::debug!("{} file(s) in {}", files.len(), project_root.display());
    Ok(files)
}
