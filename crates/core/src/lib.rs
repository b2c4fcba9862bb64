//! launchpad-core
//!
//! Core library for picking a project by its file-type icons.
//!
//! This crate defines the icon model, the built-in classification table, the
//! icon resolution and compression engine, and the project discovery, config
//! and launch plumbing around it.
//!
//! The goal is to keep all substantive logic here so it is fully testable and
//! reusable from multiple frontends.

pub mod analysis;
pub mod icons;
pub mod model;
pub mod projects;
pub mod services;
pub mod table;

pub use model::{Classification, IconDescriptor, MatchTier};
pub use table::ClassificationTable;

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
