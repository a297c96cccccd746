//! Options file I/O (YAML / JSON)
//!
//! Schema v1:
//!
//! ```yaml
//! version: 1
//! diagram:
//!   formatter: plantuml
//!   nodes:
//!     exclude: [Logger]
//!   plantuml:
//!     diagram_tags: false
//! parse:
//!   include: [src]
//!   tsconfig: config/tsconfig.app.json
//! ```

use super::options::ParseOptions;
use super::patch::ClassDiagramOptionsPatch;
use crate::errors::{Result, UmlError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Supported schema versions
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Options file schema v1
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsFileV1 {
    /// Schema version (always 1 for v1)
    pub version: u32,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub diagram: Option<ClassDiagramOptionsPatch>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub parse: Option<ParseOptions>,
}

impl OptionsFileV1 {
    /// Load from `.json`, or YAML for any other extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| UmlError::io(path, e))?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let file: OptionsFileV1 = if is_json {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        if !SUPPORTED_VERSIONS.contains(&file.version) {
            return Err(UmlError::config_parse(
                path,
                format!(
                    "unsupported options version {}; supported: {:?}",
                    file.version, SUPPORTED_VERSIONS
                ),
            ));
        }

        Ok(file)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
