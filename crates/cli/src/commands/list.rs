use anyhow::Result;
use launchpad_core::projects::LauncherConfig;

use crate::commands::collect_project_entries;

/// Print every discovered project with its icons.
pub fn list_command(config: &LauncherConfig, json: bool) -> Result<()> {
    let entries = collect_project_entries(config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("Projects: (none)");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.line);
    }
    Ok(())
}
