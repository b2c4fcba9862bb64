//! Core data model for file-type icons.
//!
//! This module contains:
//! - `IconDescriptor`: the (name, glyph, colour) triple shown for a file category
//! - `MatchTier`: which lookup tier of the classification table produced a match
//! - `Classification`: the pair returned by the classifier

use serde::Serialize;

/// A recognizable file or technology category and how to draw it.
///
/// Descriptors are defined once in the classification table and copied around
/// by value. Two descriptors are the same icon only if all three fields match,
/// which is what icon sets key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IconDescriptor {
    /// Logical identifier (e.g. `react`, `godot`).
    pub name: &'static str,
    /// Glyph to render, usually a Nerd Font code point.
    pub glyph: &'static str,
    /// xterm-256 palette index used to colour the glyph.
    pub color: u8,
}

impl IconDescriptor {
    pub const fn new(name: &'static str, glyph: &'static str, color: u8) -> Self {
        Self { name, glyph, color }
    }
}

/// Lookup tier a file name was resolved in.
///
/// Tiers are tried in declaration order; the first hit wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    FileName,
    OperatingSystem,
    DesktopEnvironment,
    WindowManager,
    Extension,
    Default,
}

impl MatchTier {
    /// Diagnostic tier number recorded in icon sets.
    ///
    /// Extension matches report `5` and the default fallback reports `0`; the
    /// value is informational only and never drives a decision.
    pub fn index(self) -> u8 {
        match self {
            MatchTier::FileName => 0,
            MatchTier::OperatingSystem => 1,
            MatchTier::DesktopEnvironment => 2,
            MatchTier::WindowManager => 3,
            MatchTier::Extension => 5,
            MatchTier::Default => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchTier::FileName => "file_name",
            MatchTier::OperatingSystem => "operating_system",
            MatchTier::DesktopEnvironment => "desktop_environment",
            MatchTier::WindowManager => "window_manager",
            MatchTier::Extension => "extension",
            MatchTier::Default => "default",
        }
    }
}

/// Result of classifying a single file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub descriptor: IconDescriptor,
    pub tier: MatchTier,
}

impl Classification {
    pub fn new(descriptor: IconDescriptor, tier: MatchTier) -> Self {
        Self { descriptor, tier }
    }
}
