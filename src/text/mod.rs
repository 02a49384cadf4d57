//! Document storage.
//!
//! A [`Document`] is an ordered list of [`Line`]s. Each line keeps its raw
//! bytes next to a tab-expanded rendering used for display and search.

mod document;
mod line;

pub use document::Document;
pub use line::{Line, TAB_STOP};
