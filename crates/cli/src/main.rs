use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use launchpad::commands::{
    classify_command, config_command, icons_command, list_command, pick_command,
};
use launchpad::{init_logging, load_config};
use launchpad_core::projects::ConfigOverrides;

/// Pick a project by its file-type icons and run its launcher script.
///
/// This CLI is a thin wrapper around `launchpad-core`. All classification,
/// compression and discovery logic lives in the library.
#[derive(Parser, Debug)]
#[command(
    name = "launchpad",
    version,
    about = "Project picker with file-type icons",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Config file (.yaml, .yml or .json). Defaults to <config dir>/launchpad/config.yaml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory searched for projects. Defaults to ~/Projects.
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// File name that marks a project directory.
    #[arg(long, global = true)]
    script: Option<String>,

    /// Program used to run the launcher script.
    #[arg(long, global = true)]
    shell: Option<String>,

    /// Print icons without colours.
    #[arg(long, global = true, default_value_t = false)]
    no_color: bool,

    /// Log debug output to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long, global = true, default_value_t = false, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Choose a project from an interactive menu and run its launcher script (default).
    Pick,

    /// List discovered projects with their icons.
    List {
        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show the icons a directory would get.
    Icons {
        /// Directory to inspect.
        #[arg(default_value = ".")]
        dir: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show how file names are classified.
    Classify {
        /// Bare file names (e.g. `Dockerfile`, `App.tsx`).
        #[arg(required = true)]
        names: Vec<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the effective configuration.
    Config {
        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let global = cli.global;
    init_logging(global.verbose, global.quiet);

    let overrides = ConfigOverrides {
        root: global.root,
        launcher_script: global.script,
        shell: global.shell,
        no_color: global.no_color,
    };
    let loaded = load_config(global.config.as_deref(), overrides)?;

    match cli.command.unwrap_or(Command::Pick) {
        Command::Pick => {
            if let Some(outcome) = pick_command(&loaded.config)? {
                if !outcome.success() {
                    log::warn!("launcher script exited with {:?}", outcome.code);
                    let code = outcome.code.and_then(|c| u8::try_from(c).ok()).unwrap_or(1);
                    return Ok(ExitCode::from(code));
                }
            }
        }
        Command::List { json } => list_command(&loaded.config, json)?,
        Command::Icons { dir, json } => icons_command(&dir, &loaded.config, json)?,
        Command::Classify { names, json } => classify_command(&names, json)?,
        Command::Config { json } => config_command(&loaded, json)?,
    }

    Ok(ExitCode::SUCCESS)
}
