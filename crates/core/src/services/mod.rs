//! Services that act on discovered projects.

pub mod launch;

pub use launch::{LaunchError, LaunchOutcome, Launcher, ShellLauncher};
