//! tsconfig.json discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::errors::{Result, UmlError};
use crate::features::project::domain::{AnchoredPatterns, TsConfig, TsConfigFile};
use crate::features::project::infrastructure::jsonc::strip_jsonc;

pub const CONFIG_FILE_NAME: &str = "tsconfig.json";

/// Search `tsconfig.json` in `start` and then each parent directory
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Explicit path (a directory means `<dir>/tsconfig.json`) or upward search
pub fn resolve_config_path(root: &Path, explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(CONFIG_FILE_NAME)
            } else {
                path.to_path_buf()
            };
            if path.is_file() {
                Ok(path)
            } else {
                Err(UmlError::ConfigNotFound(path))
            }
        }
        None => find_config_file(root).ok_or_else(|| UmlError::ConfigNotFound(root.to_path_buf())),
    }
}

/// Load a tsconfig.json, following `extends` chains
pub fn load_config(path: &Path) -> Result<TsConfig> {
    let mut chain = Vec::new();
    load_with_chain(path, &mut chain)
}

fn load_with_chain(path: &Path, chain: &mut Vec<PathBuf>) -> Result<TsConfig> {
    let path = normalize(path);
    if chain.contains(&path) {
        return Err(UmlError::config_parse(
            &path,
            "circularity detected while resolving 'extends'",
        ));
    }
    chain.push(path.clone());
    trace!("Loading tsconfig {}", path.display());

    let raw = read_config_file(&path)?;
    let dir = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();

    let mut resolved = TsConfig::empty(&path);
    if let Some(extends) = &raw.extends {
        for specifier in extends.specifiers() {
            let base_path = resolve_extends(&dir, specifier).ok_or_else(|| {
                UmlError::config_parse(&path, format!("cannot find base config '{}'", specifier))
            })?;
            debug!("{} extends {}", path.display(), base_path.display());
            let base = load_with_chain(&base_path, chain)?;
            resolved = resolved.overlay(base);
        }
    }

    let own = TsConfig {
        path: path.clone(),
        files: raw.files.map(|p| AnchoredPatterns::new(&dir, p)),
        include: raw.include.map(|p| AnchoredPatterns::new(&dir, p)),
        exclude: raw.exclude.map(|p| AnchoredPatterns::new(&dir, p)),
        out_dir: raw
            .compiler_options
            .and_then(|o| o.out_dir)
            .map(|out| dir.join(out)),
    };

    chain.pop();
    Ok(resolved.overlay(own))
}

fn read_config_file(path: &Path) -> Result<TsConfigFile> {
    let content = fs::read_to_string(path).map_err(|e| UmlError::io(path, e))?;
    serde_json::from_str(&strip_jsonc(&content))
        .map_err(|e| UmlError::config_parse(path, e.to_string()))
}

/// Relative or absolute path (`.json` implied), else a package under `node_modules`
fn resolve_extends(dir: &Path, specifier: &str) -> Option<PathBuf> {
    let with_extension = |p: PathBuf| {
        if p.extension().is_some_and(|ext| ext == "json") {
            p
        } else {
            let mut s = p.into_os_string();
            s.push(".json");
            PathBuf::from(s)
        }
    };

    let spec_path = Path::new(specifier);
    if specifier.starts_with('.') || spec_path.is_absolute() {
        let candidate = with_extension(dir.join(spec_path));
        return candidate.is_file().then_some(candidate);
    }

    dir.ancestors()
        .map(|d| d.join("node_modules").join(spec_path))
        .find_map(|base| {
            let as_dir = base.join(CONFIG_FILE_NAME);
            let as_file = with_extension(base);
            if as_file.is_file() {
                Some(as_file)
            } else if as_dir.is_file() {
                Some(as_dir)
            } else {
                None
            }
        })
}

fn normalize(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
