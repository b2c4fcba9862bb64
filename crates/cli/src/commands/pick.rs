use anyhow::{anyhow, Context, Result};
use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use launchpad_core::projects::LauncherConfig;
use launchpad_core::services::{LaunchOutcome, Launcher, ShellLauncher};

use crate::commands::{collect_project_entries, ProjectEntry};

/// Let the user choose a project interactively and run its launcher script.
///
/// Returns `None` when there was nothing to pick or the menu was cancelled.
pub fn pick_command(config: &LauncherConfig) -> Result<Option<LaunchOutcome>> {
    let entries = collect_project_entries(config)?;
    if entries.is_empty() {
        println!("No projects with a {} found.", config.launcher_script);
        return Ok(None);
    }

    let term = Term::stderr();
    if !term.is_term() {
        return Err(anyhow!(
            "pick needs an interactive terminal; use `launchpad list` for plain output"
        ));
    }

    let Some(index) = select_project(&entries)? else {
        log::debug!("selection cancelled");
        return Ok(None);
    };

    let launcher = ShellLauncher::new(&config.shell);
    launch_entry(&entries[index], &launcher).map(Some)
}

fn select_project(entries: &[ProjectEntry]) -> Result<Option<usize>> {
    let lines: Vec<&str> = entries.iter().map(|e| e.line.as_str()).collect();
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a project to initialize it (Esc or q to quit)")
        .items(&lines)
        .default(0)
        .interact_opt()
        .context("Failed to read project selection")
}

/// Hand the terminal to the project's launcher script.
pub fn launch_entry(entry: &ProjectEntry, launcher: &dyn Launcher) -> Result<LaunchOutcome> {
    let project = entry.project();
    log::info!("starting {} via {} launcher", project.label, launcher.name());
    launcher
        .launch(&project)
        .with_context(|| format!("Failed to launch {}", project.script.display()))
}
