//! Project file collection
//!
//! Resolves `files` / `include` / `exclude` against the directory of the
//! config that declared them, walks the include roots and keeps every
//! TypeScript source that is not excluded.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::errors::Result;
use crate::features::parsing::infrastructure::SUPPORTED_SUFFIXES;
use crate::features::project::domain::{AnchoredPatterns, TsConfig};

/// Excluded when the config has no `exclude`
pub const DEFAULT_EXCLUDES: &[&str] = &["node_modules", "bower_components", "jspm_packages"];

const DEFAULT_INCLUDE: &str = "**/*";

/// Sorted, deduplicated TypeScript sources of a project
pub fn collect_source_files(config: &TsConfig) -> Result<Vec<PathBuf>> {
    let config_dir = config.config_dir().to_path_buf();
    let mut result = BTreeSet::new();

    if let Some(files) = &config.files {
        for file in &files.patterns {
            let path = files.base_dir.join(file);
            if !is_supported_source(&path) {
                continue;
            }
            if path.is_file() {
                result.insert(path);
            } else {
                warn!("File '{}' listed in tsconfig does not exist", path.display());
            }
        }
    }

    let include_patterns = match (&config.include, &config.files) {
        (Some(include), _) => absolute_patterns(include),
        (None, None) => absolute_patterns(&AnchoredPatterns::new(
            &config_dir,
            vec![DEFAULT_INCLUDE.to_string()],
        )),
        (None, Some(_)) => Vec::new(),
    };
    if include_patterns.is_empty() {
        return Ok(result.into_iter().collect());
    }

    let mut exclude_patterns = match &config.exclude {
        Some(exclude) => absolute_patterns(exclude),
        None => absolute_patterns(&AnchoredPatterns::new(
            &config_dir,
            DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
        )),
    };
    if let Some(out_dir) = &config.out_dir {
        exclude_patterns.push(to_glob_path(out_dir));
    }

    let include = build_glob_set(include_patterns.iter().map(|p| expand_directory(p)))?;
    let exclude = build_glob_set(
        exclude_patterns
            .iter()
            .flat_map(|p| [p.clone(), expand_directory(p)]),
    )?;

    let roots: BTreeSet<PathBuf> = include_patterns.iter().map(|p| walk_root(p)).collect();
    for root in roots {
        debug!("Scanning {}", root.display());
        let is_excluded_dir = |e: &DirEntry| {
            e.file_type().is_dir() && exclude.is_match(to_glob_path(e.path()))
        };
        let walker = WalkDir::new(&root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !is_excluded_dir(e));

        for entry in walker.filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() || !is_supported_source(entry.path()) {
                continue;
            }
            let candidate = to_glob_path(entry.path());
            if include.is_match(&candidate) && !exclude.is_match(&candidate) {
                result.insert(entry.into_path());
            }
        }
    }

    Ok(result.into_iter().collect())
}

/// `.ts`, `.tsx` or `.d.ts`
pub fn is_supported_source(path: &Path) -> bool {
    let name = path.to_string_lossy();
    SUPPORTED_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// A pattern whose last segment has no wildcard and no extension names a directory
pub fn expand_directory(pattern: &str) -> String {
    let last = pattern.rsplit('/').next().unwrap_or(pattern);
    if last == "**" {
        format!("{}/*", pattern)
    } else if has_wildcard(last) || last.contains('.') {
        pattern.to_string()
    } else {
        format!("{}/**/*", pattern.trim_end_matches('/'))
    }
}

fn absolute_patterns(anchored: &AnchoredPatterns) -> Vec<String> {
    anchored
        .patterns
        .iter()
        .map(|p| to_glob_path(&lexical_normalize(&anchored.base_dir.join(p))))
        .collect()
}

fn has_wildcard(segment: &str) -> bool {
    segment.contains(['*', '?', '[', '{'])
}

/// Longest wildcard-free directory prefix of an absolute pattern
fn walk_root(pattern: &str) -> PathBuf {
    let expanded = expand_directory(pattern);
    let mut segments: Vec<&str> = expanded.split('/').collect();
    // Last segment is a file pattern
    segments.pop();
    let literal: Vec<&str> = segments
        .into_iter()
        .take_while(|segment| !has_wildcard(segment))
        .collect();

    if literal.is_empty() || literal == [""] {
        PathBuf::from("/")
    } else {
        PathBuf::from(literal.join("/"))
    }
}

fn build_glob_set<I>(patterns: I) -> Result<GlobSet>
where
    I: IntoIterator<Item = String>,
{
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(GlobBuilder::new(&pattern).literal_separator(true).build()?);
    }
    Ok(builder.build()?)
}

fn to_glob_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Resolve `.` and `..` without touching the filesystem
fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
