//! Error types for typescript-uml
//!
//! The model builder and diagram filter never fail; every error here comes
//! from the surrounding collaborators (file I/O, parser setup, tsconfig
//! discovery, option loading).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for typescript-uml operations
#[derive(Debug, Error)]
pub enum UmlError {
    /// File could not be read or written
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parser could not be set up or produced no tree
    #[error("Parse error: {0}")]
    Parse(String),

    /// No tsconfig.json was found
    #[error("Cannot find a tsconfig.json file at {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// tsconfig.json was unreadable as configuration
    #[error("error in {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// Invalid include/exclude glob
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] globset::Error),

    /// JSON (de)serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML (de)serialization failure
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Formatter name not recognized
    #[error("Unknown formatter '{0}'. Valid formatters: yuml, plantuml, json")]
    UnknownFormatter(String),
}

impl UmlError {
    /// Attach a path to an I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        UmlError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        UmlError::Parse(msg.into())
    }

    /// Create a tsconfig error
    pub fn config_parse(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        UmlError::ConfigParse {
            path: path.into(),
            message: msg.into(),
        }
    }
}

/// Result type alias for typescript-uml operations
pub type Result<T> = std::result::Result<T, UmlError>;
