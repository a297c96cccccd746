//! Parsing infrastructure (tree-sitter)

pub mod node_kinds;
mod parser;

pub use parser::{TypeScriptParser, SUPPORTED_SUFFIXES};
