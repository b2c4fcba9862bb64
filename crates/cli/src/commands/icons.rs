use anyhow::{anyhow, Context, Result};
use launchpad_core::analysis::summarize;
use launchpad_core::projects::{list_project_files, LauncherConfig};
use launchpad_core::ClassificationTable;
use serde::Serialize;

use crate::canonicalize_or_current;

#[derive(Debug, Serialize)]
pub struct DirIcons {
    pub dir: String,
    pub files: usize,
    pub icons: Vec<&'static str>,
    pub glyphs: Vec<&'static str>,
}

/// Show the compressed icon line for an arbitrary directory.
pub fn icons_command(dir: &str, config: &LauncherConfig, json: bool) -> Result<()> {
    let dir_path = canonicalize_or_current(dir)?;
    if !dir_path.is_dir() {
        return Err(anyhow!("Directory does not exist: {}", dir_path.display()));
    }

    let files = list_project_files(&dir_path, &config.discovery_options())
        .with_context(|| format!("Failed to list files in {}", dir_path.display()))?;
    let summary = summarize(ClassificationTable::builtin(), &files, config.color && !json);

    if json {
        let body = DirIcons {
            dir: dir_path.display().to_string(),
            files: files.len(),
            icons: summary.names,
            glyphs: summary.glyphs,
        };
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("{}", summary.line);
    Ok(())
}
