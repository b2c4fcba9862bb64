pub mod classify;
pub mod config;
pub mod icons;
pub mod list;
pub mod pick;
pub mod util;

pub use classify::*;
pub use config::*;
pub use icons::*;
pub use list::*;
pub use pick::*;
pub use util::*;
