//! Option types with documented defaults
//!
//! - `ClassDiagramOptions`: how a built model is filtered and rendered
//! - `ParseOptions`: which files a project parse covers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::errors::UmlError;

/// Diagram notation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formatter {
    #[default]
    Yuml,
    PlantUml,
    Json,
}

impl Formatter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Formatter::Yuml => "yuml",
            Formatter::PlantUml => "plantuml",
            Formatter::Json => "json",
        }
    }
}

impl FromStr for Formatter {
    type Err = UmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yuml" => Ok(Formatter::Yuml),
            "plantuml" => Ok(Formatter::PlantUml),
            "json" => Ok(Formatter::Json),
            _ => Err(UmlError::UnknownFormatter(s.to_string())),
        }
    }
}

impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Node-name filter applied before rendering
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeFilterOptions {
    /// Only these nodes (default: all)
    pub include: Option<Vec<String>>,

    /// Never these nodes (default: none)
    pub exclude: Option<Vec<String>>,
}

/// PlantUML-specific rendering options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantUmlOptions {
    /// Wrap output in `@startuml` / `@enduml` (default: true)
    pub diagram_tags: bool,
}

impl Default for PlantUmlOptions {
    fn default() -> Self {
        Self { diagram_tags: true }
    }
}

/// Fully populated diagram options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDiagramOptions {
    pub formatter: Formatter,
    pub nodes: NodeFilterOptions,
    pub plantuml: PlantUmlOptions,
}

impl ClassDiagramOptions {
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_include(mut self, include: Vec<String>) -> Self {
        self.nodes.include = Some(include);
        self
    }

    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.nodes.exclude = Some(exclude);
        self
    }

    pub fn with_diagram_tags(mut self, diagram_tags: bool) -> Self {
        self.plantuml.diagram_tags = diagram_tags;
        self
    }
}

/// Which files a project parse covers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParseOptions {
    /// Replaces the tsconfig `include` list
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub include: Option<Vec<String>>,

    /// Appended to the tsconfig `exclude` list
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub exclude: Option<Vec<String>>,

    /// tsconfig.json path or its directory (default: search upward)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tsconfig: Option<PathBuf>,
}

impl ParseOptions {
    pub fn with_include(mut self, include: Vec<String>) -> Self {
        self.include = Some(include);
        self
    }

    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = Some(exclude);
        self
    }

    pub fn with_tsconfig(mut self, tsconfig: impl Into<PathBuf>) -> Self {
        self.tsconfig = Some(tsconfig.into());
        self
    }

    /// Field-wise override: values set in `other` win
    pub fn merge(self, other: ParseOptions) -> Self {
        Self {
            include: other.include.or(self.include),
            exclude: other.exclude.or(self.exclude),
            tsconfig: other.tsconfig.or(self.tsconfig),
        }
    }
}
