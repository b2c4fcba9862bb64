use std::path::PathBuf;
use std::process::{Command, Stdio};

use serde::Serialize;
use thiserror::Error;

use crate::projects::Project;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Launcher script not found at {0}")]
    MissingScript(PathBuf),

    #[error("Failed to run {program} for {script}: {source}")]
    Spawn { program: String, script: PathBuf, source: std::io::Error },
}

/// Exit information of a launched script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LaunchOutcome {
    /// Exit code, `None` when the script was terminated by a signal.
    pub code: Option<i32>,
}

impl LaunchOutcome {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Trait implemented by anything that can start a project.
pub trait Launcher {
    fn launch(&self, project: &Project) -> Result<LaunchOutcome, LaunchError>;
    fn name(&self) -> &'static str;
}

/// Runs the launcher script with a shell, inside the project directory.
///
/// The terminal is handed over to the script until it exits.
#[derive(Debug, Clone)]
pub struct ShellLauncher {
    pub shell: String,
}

impl ShellLauncher {
    pub fn new(shell: impl Into<String>) -> Self {
        Self { shell: shell.into() }
    }

    /// The command that would be run for `project`, without running it.
    pub fn command(&self, project: &Project) -> Command {
        let mut cmd = Command::new(&self.shell);
        cmd.arg(&project.script)
            .current_dir(&project.root)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

impl Default for ShellLauncher {
    fn default() -> Self {
        Self::new("bash")
    }
}

impl Launcher for ShellLauncher {
    fn launch(&self, project: &Project) -> Result<LaunchOutcome, LaunchError> {
        if !project.script.is_file() {
            return Err(LaunchError::MissingScript(project.script.clone()));
        }

        log::info!("launching {} with {}", project.script.display(), self.shell);
        let status = self.command(project).status().map_err(|source| LaunchError::Spawn {
            program: self.shell.clone(),
            script: project.script.clone(),
            source,
        })?;
        Ok(LaunchOutcome { code: status.code() })
    }

    fn name(&self) -> &'static str {
        "shell"
    }
}
