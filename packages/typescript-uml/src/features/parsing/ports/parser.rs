//! Parser port (interface)
//!
//! Defines the contract for turning source text into a syntax tree.

use crate::errors::Result;
use crate::features::parsing::domain::SourceUnit;

/// Parser trait - abstraction over the parsing implementation
pub trait SourceParser {
    /// Parse source code into a SourceUnit
    fn parse(&self, source: &str, file_path: &str) -> Result<SourceUnit>;

    /// Check if this parser supports the given file path
    fn supports_path(&self, path: &str) -> bool;
}
