//! Icon resolution and compression engine.
//!
//! Pipeline for one project directory:
//! file names -> `classify` each -> `build` an `IconSet` -> `compress` it with
//! collapse rules -> `render` one glyph per distinct symbol.

pub mod classify;
pub mod compress;
pub mod render;
pub mod set;

pub use classify::{classify, extension_of};
pub use compress::{compress, compress_with, CollapseRule, BUILTIN_RULES};
pub use render::{glyphs, render, render_plain};
pub use set::{build, IconSet};
