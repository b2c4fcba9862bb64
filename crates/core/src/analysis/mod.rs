//! Per-project icon summaries.
//!
//! This is the entry point frontends use: feed in the files of one project and
//! get back its display line, plus the data behind it for JSON output.

use std::path::Path;

use serde::Serialize;

use crate::icons::{self, IconSet};
use crate::table::ClassificationTable;

/// Compressed icons of one project and how they display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectIcons {
    /// Descriptor names left after compression, in display order.
    pub names: Vec<&'static str>,
    /// Distinct glyphs, in display order.
    pub glyphs: Vec<&'static str>,
    /// Rendered line (colourized unless requested otherwise).
    pub line: String,
}

/// `build` then `compress`.
pub fn icon_set<I, P>(table: &ClassificationTable, paths: I) -> IconSet
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    icons::compress(table, icons::build(table, paths))
}

/// Rendered, colourized icon line for a project's files.
pub fn icon_line<I, P>(table: &ClassificationTable, paths: I) -> String
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    icons::render(&icon_set(table, paths))
}

pub fn summarize<I, P>(table: &ClassificationTable, paths: I, color: bool) -> ProjectIcons
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let set = icon_set(table, paths);
    let line = if color { icons::render(&set) } else { icons::render_plain(&set) };
    ProjectIcons { names: set.names(), glyphs: icons::glyphs(&set), line }
}
