//! Path queries over generic values.
//!
//! A path is a dotted string such as `data.[iso=GB].name`. Segments are
//! field names, indices, empty wildcards, or `[key=value]` filters.

mod evaluator;
mod path;

pub use evaluator::{evaluate, filter_path};
pub use path::{Path, Segment};
