use std::collections::HashSet;

use console::Style;

use crate::icons::set::IconSet;
use crate::model::IconDescriptor;

/// Colourized glyph line: each distinct glyph once, in set order, followed by a space.
///
/// Styling is forced on so the result is the same whether or not stdout is a terminal.
pub fn render(set: &IconSet) -> String {
    render_with(set, |descriptor| {
        Style::new()
            .color256(descriptor.color)
            .force_styling(true)
            .apply_to(format!("{} ", descriptor.glyph))
            .to_string()
    })
}

/// Same as [`render`] without ANSI escapes.
pub fn render_plain(set: &IconSet) -> String {
    render_with(set, |descriptor| format!("{} ", descriptor.glyph))
}

/// Distinct glyphs of `set`, in set order.
pub fn glyphs(set: &IconSet) -> Vec<&'static str> {
    let mut seen = HashSet::new();
    set.descriptors().map(|d| d.glyph).filter(|glyph| seen.insert(*glyph)).collect()
}

fn render_with(set: &IconSet, paint: impl Fn(&IconDescriptor) -> String) -> String {
    let mut emitted: HashSet<&str> = HashSet::new();
    let mut out = String::new();
    for descriptor in set.descriptors() {
        if emitted.insert(descriptor.glyph) {
            out.push_str(&paint(descriptor));
        }
    }
    out
}
