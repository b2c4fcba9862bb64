//! Classification table: tiered lookup data for file-type icons.
//!
//! The table is built once and read from everywhere. It holds:
//! - four name tiers (exact file name, OS marker, desktop environment marker,
//!   window manager marker), searched in order
//! - an extension map consulted when no name tier matches
//! - a default descriptor used when nothing matches at all
//! - an ignore list of descriptor names that are never shown

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::model::{IconDescriptor, MatchTier};

mod builtin;

static BUILTIN: Lazy<ClassificationTable> = Lazy::new(builtin::table);

/// One name tier: a priority label plus its key -> descriptor map.
pub type Tier = (MatchTier, HashMap<&'static str, IconDescriptor>);

#[derive(Debug, Clone)]
pub struct ClassificationTable {
    tiers: Vec<Tier>,
    extensions: HashMap<&'static str, IconDescriptor>,
    default: IconDescriptor,
    ignored: Vec<&'static str>,
}

impl ClassificationTable {
    /// Assemble a table from raw entries.
    ///
    /// `tiers` is searched in the order given. Later duplicates of a key inside
    /// one tier replace earlier ones.
    pub fn new(
        tiers: Vec<(MatchTier, &[(&'static str, IconDescriptor)])>,
        extensions: &[(&'static str, IconDescriptor)],
        default: IconDescriptor,
        ignored: &[&'static str],
    ) -> Self {
        let tiers = tiers
            .into_iter()
            .map(|(tier, entries)| (tier, entries.iter().copied().collect()))
            .collect();
        Self {
            tiers,
            extensions: extensions.iter().copied().collect(),
            default,
            ignored: ignored.to_vec(),
        }
    }

    /// The process-wide built-in table.
    pub fn builtin() -> &'static ClassificationTable {
        &BUILTIN
    }

    /// Name tiers in priority order.
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn by_extension(&self, extension: &str) -> Option<IconDescriptor> {
        self.extensions.get(extension).copied()
    }

    pub fn default_descriptor(&self) -> IconDescriptor {
        self.default
    }

    /// Whether descriptors with this name are dropped before they reach an icon set.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored.iter().any(|ignored| *ignored == name)
    }

    pub fn ignored_names(&self) -> &[&'static str] {
        &self.ignored
    }

    /// Number of keys across all tiers and the extension map.
    pub fn len(&self) -> usize {
        self.tiers.iter().map(|(_, map)| map.len()).sum::<usize>() + self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tiers_are_in_priority_order() {
        let order: Vec<MatchTier> =
            ClassificationTable::builtin().tiers().iter().map(|(tier, _)| *tier).collect();
        assert_eq!(
            order,
            vec![
                MatchTier::FileName,
                MatchTier::OperatingSystem,
                MatchTier::DesktopEnvironment,
                MatchTier::WindowManager,
            ]
        );
    }

    #[test]
    fn builtin_default_is_ignored() {
        let table = ClassificationTable::builtin();
        assert!(table.is_ignored(table.default_descriptor().name));
    }

    #[test]
    fn builtin_covers_collapse_rule_keys() {
        let table = ClassificationTable::builtin();
        for ext in
            ["html", "css", "js", "cjs", "mjs", "jsx", "tsx", "gd", "godot", "tres", "tscn"]
        {
            assert!(table.by_extension(ext).is_some(), "missing extension entry for {ext}");
        }
    }
}
