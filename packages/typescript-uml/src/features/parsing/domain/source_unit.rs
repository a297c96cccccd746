//! Parsed source unit
//!
//! One file's source text together with its concrete syntax tree.

use crate::shared::utils::tree_sitter::count_syntax_errors;
use std::fmt;
use std::path::Path;
use tree_sitter::{Node, Tree};

/// Grammar flavour used for a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    TypeScript,
    Tsx,
}

impl Dialect {
    /// `.tsx` files need the TSX grammar; everything else parses as TypeScript
    pub fn from_path(path: &str) -> Self {
        match Path::new(path).extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsx") => Dialect::Tsx,
            _ => Dialect::TypeScript,
        }
    }

    pub fn language(&self) -> tree_sitter::Language {
        match self {
            Dialect::TypeScript => tree_sitter_typescript::language_typescript(),
            Dialect::Tsx => tree_sitter_typescript::language_tsx(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::TypeScript => "typescript",
            Dialect::Tsx => "tsx",
        }
    }
}

/// Parsed file
pub struct SourceUnit {
    /// File path (for diagnostics)
    pub file_path: String,

    /// Source code
    pub source: String,

    pub dialect: Dialect,

    tree: Tree,
}

impl SourceUnit {
    pub fn new(
        file_path: impl Into<String>,
        source: impl Into<String>,
        dialect: Dialect,
        tree: Tree,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            source: source.into(),
            dialect,
            tree,
        }
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn has_errors(&self) -> bool {
        self.root().has_error()
    }

    /// Number of ERROR / MISSING nodes the parser recovered from
    pub fn error_count(&self) -> usize {
        count_syntax_errors(self.root())
    }
}

impl fmt::Debug for SourceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceUnit")
            .field("file_path", &self.file_path)
            .field("dialect", &self.dialect)
            .field("bytes", &self.source.len())
            .finish()
    }
}
