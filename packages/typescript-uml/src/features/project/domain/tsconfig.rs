//! tsconfig.json shape
//!
//! Only the fields that decide which files belong to a project are read;
//! everything else in the file is ignored.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// `extends` may be one config or a list (later entries win)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Extends {
    One(String),
    Many(Vec<String>),
}

impl Extends {
    pub fn specifiers(&self) -> Vec<&str> {
        match self {
            Extends::One(s) => vec![s.as_str()],
            Extends::Many(v) => v.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    #[serde(default)]
    pub out_dir: Option<String>,
}

/// Raw tsconfig.json content
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsConfigFile {
    #[serde(default)]
    pub extends: Option<Extends>,
    #[serde(default)]
    pub files: Option<Vec<String>>,
    #[serde(default)]
    pub include: Option<Vec<String>>,
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
    #[serde(default)]
    pub compiler_options: Option<CompilerOptions>,
}

/// Pattern list anchored at the directory of the config that declared it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchoredPatterns {
    pub base_dir: PathBuf,
    pub patterns: Vec<String>,
}

impl AnchoredPatterns {
    pub fn new(base_dir: impl Into<PathBuf>, patterns: Vec<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            patterns,
        }
    }
}

/// tsconfig after following `extends`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsConfig {
    /// The tsconfig.json that was loaded first
    pub path: PathBuf,
    pub files: Option<AnchoredPatterns>,
    pub include: Option<AnchoredPatterns>,
    pub exclude: Option<AnchoredPatterns>,
    /// Absolute `compilerOptions.outDir`
    pub out_dir: Option<PathBuf>,
}

impl TsConfig {
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            files: None,
            include: None,
            exclude: None,
            out_dir: None,
        }
    }

    /// Directory holding the tsconfig.json
    pub fn config_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Layer `child` on top of `self`: every field the child sets wins
    pub fn overlay(self, child: TsConfig) -> TsConfig {
        TsConfig {
            path: child.path,
            files: child.files.or(self.files),
            include: child.include.or(self.include),
            exclude: child.exclude.or(self.exclude),
            out_dir: child.out_dir.or(self.out_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extends_forms() {
        let one: TsConfigFile = serde_json::from_str(r#"{"extends": "./base"}"#).unwrap();
        assert_eq!(one.extends.unwrap().specifiers(), vec!["./base"]);

        let many: TsConfigFile =
            serde_json::from_str(r#"{"extends": ["./a", "./b"]}"#).unwrap();
        assert_eq!(many.extends.unwrap().specifiers(), vec!["./a", "./b"]);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let config: TsConfigFile = serde_json::from_str(
            r#"{"compilerOptions": {"target": "es5", "outDir": "dist"}, "references": []}"#,
        )
        .unwrap();
        assert_eq!(config.compiler_options.unwrap().out_dir.as_deref(), Some("dist"));
    }

    #[test]
    fn test_overlay_child_wins() {
        let mut base = TsConfig::empty("/p/base.json");
        base.include = Some(AnchoredPatterns::new("/p", vec!["lib".into()]));
        base.exclude = Some(AnchoredPatterns::new("/p", vec!["tmp".into()]));

        let mut child = TsConfig::empty("/p/app/tsconfig.json");
        child.include = Some(AnchoredPatterns::new("/p/app", vec!["src".into()]));

        let merged = base.overlay(child);
        assert_eq!(merged.path, PathBuf::from("/p/app/tsconfig.json"));
        assert_eq!(merged.include.unwrap().base_dir, PathBuf::from("/p/app"));
        assert_eq!(merged.exclude.unwrap().base_dir, PathBuf::from("/p"));
    }
}
