use std::path::PathBuf;

use anyhow::{Context, Result};
use launchpad_core::analysis::{summarize, ProjectIcons};
use launchpad_core::projects::{discover_projects, list_project_files, LauncherConfig, Project};
use launchpad_core::ClassificationTable;
use serde::Serialize;

/// A project together with its compressed icons.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectEntry {
    pub label: String,
    pub root: PathBuf,
    pub script: PathBuf,
    pub icons: Vec<&'static str>,
    pub glyphs: Vec<&'static str>,
    #[serde(skip)]
    pub line: String,
}

impl ProjectEntry {
    pub fn new(project: Project, icons: ProjectIcons) -> Self {
        let line = project.display_line(&icons.line);
        Self {
            label: project.label,
            root: project.root,
            script: project.script,
            icons: icons.names,
            glyphs: icons.glyphs,
            line,
        }
    }

    pub fn project(&self) -> Project {
        Project { label: self.label.clone(), root: self.root.clone(), script: self.script.clone() }
    }
}

/// Discover projects under the configured root and summarize each one's icons.
pub fn collect_project_entries(config: &LauncherConfig) -> Result<Vec<ProjectEntry>> {
    let root = config.resolved_root()?;
    let options = config.discovery_options();
    let table = ClassificationTable::builtin();

    let projects = discover_projects(&root, &options)
        .with_context(|| format!("Failed to discover projects under {}", root.display()))?;

    let mut entries = Vec::with_capacity(projects.len());
    for project in projects {
        let files = list_project_files(&project.root, &options)
            .with_context(|| format!("Failed to list files in {}", project.root.display()))?;
        let icons = summarize(table, &files, config.color);
        entries.push(ProjectEntry::new(project, icons));
    }
    Ok(entries)
}
