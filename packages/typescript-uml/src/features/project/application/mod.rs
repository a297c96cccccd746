pub mod discover;

pub use discover::{apply_parse_options, discover_project, ProjectFiles};
