use std::path::Path;

use indexmap::IndexMap;

use crate::model::IconDescriptor;
use crate::table::ClassificationTable;

/// Icons found in one project, keyed by full descriptor identity.
///
/// Each entry remembers the diagnostic tier index it was matched at.
/// Iteration follows first-insertion order; overwriting an entry keeps its slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconSet {
    entries: IndexMap<IconDescriptor, u8>,
}

impl IconSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor, returning the tier it previously had.
    pub fn insert(&mut self, descriptor: IconDescriptor, tier: u8) -> Option<u8> {
        self.entries.insert(descriptor, tier)
    }

    /// Remove a descriptor if present. Remaining entries keep their order.
    pub fn remove(&mut self, descriptor: &IconDescriptor) -> bool {
        self.entries.shift_remove(descriptor).is_some()
    }

    pub fn contains(&self, descriptor: &IconDescriptor) -> bool {
        self.entries.contains_key(descriptor)
    }

    pub fn tier_of(&self, descriptor: &IconDescriptor) -> Option<u8> {
        self.entries.get(descriptor).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&IconDescriptor, u8)> {
        self.entries.iter().map(|(descriptor, tier)| (descriptor, *tier))
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &IconDescriptor> {
        self.entries.keys()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.keys().map(|d| d.name).collect()
    }
}

impl FromIterator<(IconDescriptor, u8)> for IconSet {
    fn from_iter<I: IntoIterator<Item = (IconDescriptor, u8)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

/// Build the icon set for a list of file paths.
///
/// Only the base name of each path is classified. Descriptors on the table's
/// ignore list are dropped.
pub fn build<I, P>(table: &ClassificationTable, paths: I) -> IconSet
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut set = IconSet::new();
    for path in paths {
        let path = path.as_ref();
        let file_name =
            path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
        let classification = table.classify(&file_name);
        let descriptor = classification.descriptor;
        if table.is_ignored(descriptor.name) {
            log::trace!("ignoring {} ({})", path.display(), descriptor.name);
            continue;
        }
        log::trace!(
            "{} -> {} ({})",
            path.display(),
            descriptor.name,
            classification.tier.as_str()
        );
        set.insert(descriptor, classification.tier.index());
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: IconDescriptor = IconDescriptor::new("a", "A", 1);
    const B: IconDescriptor = IconDescriptor::new("b", "B", 2);
    const C: IconDescriptor = IconDescriptor::new("c", "C", 3);

    #[test]
    fn reinsert_keeps_position_and_overwrites_tier() {
        let mut set = IconSet::new();
        set.insert(A, 0);
        set.insert(B, 5);
        assert_eq!(set.insert(A, 3), Some(0));
        assert_eq!(set.names(), vec!["a", "b"]);
        assert_eq!(set.tier_of(&A), Some(3));
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut set: IconSet = [(A, 0), (B, 0), (C, 0)].into_iter().collect();
        assert!(set.remove(&B));
        assert!(!set.remove(&B));
        assert_eq!(set.names(), vec!["a", "c"]);
    }
}
