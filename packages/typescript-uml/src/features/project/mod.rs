//! TypeScript project discovery
//!
//! tsconfig.json lookup (upward search, `extends` chains, JSON with
//! comments) and source-file collection from `files` / `include` /
//! `exclude`.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{apply_parse_options, discover_project, ProjectFiles};
pub use domain::{TsConfig, TsConfigFile};
pub use infrastructure::{collect_source_files, find_config_file, load_config, strip_jsonc};
