//! Parsing Feature
//!
//! Turns TypeScript source text into a tree-sitter syntax tree.
//!
//! ## Structure
//! - `domain/` - SourceUnit, Dialect
//! - `ports/` - SourceParser trait
//! - `infrastructure/` - TypeScriptParser, node kind constants

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::{Dialect, SourceUnit};
pub use infrastructure::{node_kinds, TypeScriptParser};
pub use ports::SourceParser;
