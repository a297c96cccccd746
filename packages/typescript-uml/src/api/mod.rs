//! Public entry points
//!
//! Thin functions over the features, used by the `tsuml` binary and by
//! library callers.

pub mod class_diagram;

pub use class_diagram::{generate_class_diagram, parse_file, parse_project, parse_source};
