use crate::icons::set::IconSet;
use crate::table::ClassificationTable;

/// "If `trigger` is present, remove `removes`."
///
/// Keys are extension keys resolved through the classification table, so a rule
/// always refers to the same descriptors the classifier hands out. A rule may
/// run another rule first through `then`; the nested rule still checks its
/// own trigger.
#[derive(Debug, Clone, Copy)]
pub struct CollapseRule {
    pub name: &'static str,
    pub trigger: &'static str,
    pub removes: &'static [&'static str],
    pub then: Option<&'static CollapseRule>,
}

/// JSX marks a React project; the plain web icons are implied.
pub const REACT: CollapseRule = CollapseRule {
    name: "react",
    trigger: "jsx",
    removes: &["html", "css", "js", "cjs", "mjs"],
    then: None,
};

/// TSX supersedes JSX. React's collapse runs first so only the TSX marker remains.
pub const TSX: CollapseRule =
    CollapseRule { name: "tsx", trigger: "tsx", removes: &["jsx"], then: Some(&REACT) };

/// GDScript marks a Godot project; project/resource/scene files are implied.
pub const GODOT: CollapseRule =
    CollapseRule { name: "godot", trigger: "gd", removes: &["godot", "tres", "tscn"], then: None };

/// Rules applied by [`compress`], in order.
pub const BUILTIN_RULES: &[CollapseRule] = &[REACT, TSX, GODOT];

impl CollapseRule {
    /// Apply this rule to `set`. Returns how many icons were removed.
    pub fn apply(&self, table: &ClassificationTable, set: &mut IconSet) -> usize {
        let Some(trigger) = table.by_extension(self.trigger) else {
            return 0;
        };
        if !set.contains(&trigger) {
            return 0;
        }

        let mut removed = self.then.map_or(0, |inner| inner.apply(table, set));
        for key in self.removes {
            if let Some(target) = table.by_extension(key) {
                if set.remove(&target) {
                    removed += 1;
                }
            }
        }
        removed
    }
}

/// Collapse icons implied by a more specific marker using the built-in rules.
pub fn compress(table: &ClassificationTable, set: IconSet) -> IconSet {
    compress_with(table, set, BUILTIN_RULES)
}

/// Apply `rules` in order; each sees the result of the ones before it.
pub fn compress_with(
    table: &ClassificationTable,
    mut set: IconSet,
    rules: &[CollapseRule],
) -> IconSet {
    for rule in rules {
        let removed = rule.apply(table, &mut set);
        if removed > 0 {
            log::debug!("collapse rule '{}' removed {} icon(s)", rule.name, removed);
        }
    }
    set
}
