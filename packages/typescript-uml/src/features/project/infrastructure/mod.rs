pub mod config_loader;
pub mod file_collector;
pub mod jsonc;

pub use config_loader::{find_config_file, load_config, resolve_config_path};
pub use file_collector::collect_source_files;
pub use jsonc::strip_jsonc;
