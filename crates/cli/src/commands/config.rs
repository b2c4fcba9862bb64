use anyhow::Result;
use serde::Serialize;

use crate::LoadedConfig;

#[derive(Serialize)]
struct ConfigSnapshot<'a> {
    source: Option<String>,
    resolved_root: String,
    #[serde(flatten)]
    config: &'a launchpad_core::projects::LauncherConfig,
}

/// Print the effective configuration and where it was loaded from.
pub fn config_command(loaded: &LoadedConfig, json: bool) -> Result<()> {
    let config = &loaded.config;
    let root = config.resolved_root()?;
    let source = loaded.source.as_ref().map(|p| p.display().to_string());

    if json {
        let snapshot = ConfigSnapshot { source, resolved_root: root.display().to_string(), config };
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("launchpad config");
    println!("================");
    println!("Source: {}", source.as_deref().unwrap_or("(defaults)"));
    println!("Root: {}", root.display());
    println!("Launcher script: {}", config.launcher_script);
    println!("Shell: {}", config.shell);
    println!("Skip dirs: {}", config.skip_dirs.join(", "));
    println!("Skip hidden dirs: {}", config.skip_hidden);
    println!("Color: {}", config.color);
    Ok(())
}
