use crate::model::{Classification, MatchTier};
use crate::table::ClassificationTable;

/// Resolve a bare file name to exactly one icon.
///
/// Name tiers are tried in table order, then the extension map, then the
/// default descriptor. Never fails.
pub fn classify(table: &ClassificationTable, file_name: &str) -> Classification {
    for (tier, entries) in table.tiers() {
        if let Some(descriptor) = entries.get(file_name) {
            return Classification::new(*descriptor, *tier);
        }
    }

    let extension = extension_of(file_name);
    let by_extension = table.by_extension(extension).or_else(|| {
        let lowered = extension.to_ascii_lowercase();
        if lowered != extension {
            table.by_extension(&lowered)
        } else {
            None
        }
    });
    if let Some(descriptor) = by_extension {
        return Classification::new(descriptor, MatchTier::Extension);
    }

    Classification::new(table.default_descriptor(), MatchTier::Default)
}

/// Text after the last `.` of a file name, or `""` when there is none.
///
/// A leading dot counts, so `.bashrc` has extension `bashrc`.
pub fn extension_of(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) => &file_name[idx + 1..],
        None => "",
    }
}

impl ClassificationTable {
    pub fn classify(&self, file_name: &str) -> Classification {
        classify(self, file_name)
    }
}
