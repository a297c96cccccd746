//! Shared utilities

pub mod tree_sitter;
