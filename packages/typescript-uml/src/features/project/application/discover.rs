//! Project discovery: tsconfig lookup plus `ParseOptions` overrides

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::ParseOptions;
use crate::errors::Result;
use crate::features::project::domain::{AnchoredPatterns, TsConfig};
use crate::features::project::infrastructure::file_collector::DEFAULT_EXCLUDES;
use crate::features::project::infrastructure::{
    collect_source_files, load_config, resolve_config_path,
};

/// Files of one TypeScript project
#[derive(Debug, Clone)]
pub struct ProjectFiles {
    pub config_path: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Locate and load the project's tsconfig, then list its sources
pub fn discover_project(root: &Path, options: &ParseOptions) -> Result<ProjectFiles> {
    let config_path = resolve_config_path(root, options.tsconfig.as_deref())?;
    let config = apply_parse_options(load_config(&config_path)?, options);
    let files = collect_source_files(&config)?;

    info!(
        "Found {} source files for {}",
        files.len(),
        config_path.display()
    );

    Ok(ProjectFiles { config_path, files })
}

/// `include` replaces the config's list; `exclude` is appended to it
pub fn apply_parse_options(mut config: TsConfig, options: &ParseOptions) -> TsConfig {
    let config_dir = config.config_dir().to_path_buf();

    if let Some(include) = &options.include {
        config.include = Some(AnchoredPatterns::new(&config_dir, include.clone()));
    }

    if let Some(extra) = &options.exclude {
        let mut exclude = config.exclude.take().unwrap_or_else(|| {
            AnchoredPatterns::new(
                &config_dir,
                DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            )
        });
        // Anchored at the config dir regardless of where the base list came from
        exclude.patterns.extend(
            extra
                .iter()
                .map(|p| config_dir.join(p).to_string_lossy().into_owned()),
        );
        config.exclude = Some(exclude);
    }

    config
}
