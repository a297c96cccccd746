//! Tree-sitter parser implementation
//!
//! This is where the tree-sitter dependency lives.

use tree_sitter::Parser as TSParser;
use tracing::{debug, warn};

use crate::errors::{Result, UmlError};
use crate::features::parsing::domain::{Dialect, SourceUnit};
use crate::features::parsing::ports::SourceParser;

/// File suffixes collected as TypeScript sources
pub const SUPPORTED_SUFFIXES: &[&str] = &[".ts", ".tsx", ".d.ts"];

/// Tree-sitter based TypeScript parser
///
/// Stateless; a fresh tree-sitter parser is created per call so the value
/// can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptParser {
    dialect: Option<Dialect>,
}

impl TypeScriptParser {
    /// Pick the dialect from each file's extension
    pub fn new() -> Self {
        Self { dialect: None }
    }

    /// Always use the given dialect
    pub fn with_dialect(dialect: Dialect) -> Self {
        Self {
            dialect: Some(dialect),
        }
    }

    fn dialect_for(&self, file_path: &str) -> Dialect {
        self.dialect.unwrap_or_else(|| Dialect::from_path(file_path))
    }
}

impl SourceParser for TypeScriptParser {
    fn parse(&self, source: &str, file_path: &str) -> Result<SourceUnit> {
        let dialect = self.dialect_for(file_path);

        let mut parser = TSParser::new();
        if let Err(e) = parser.set_language(&dialect.language()) {
            let message = format!("Failed to set {} language: {}", dialect.as_str(), e);
            return Err(UmlError::parse(message));
        }

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| UmlError::parse(format!("Failed to parse {}", file_path)))?;

        let unit = SourceUnit::new(file_path, source, dialect, tree);
        if unit.has_errors() {
            warn!(
                file = %file_path,
                errors = unit.error_count(),
                "Syntax errors recovered; affected declarations are skipped"
            );
        } else {
            debug!(file = %file_path, dialect = dialect.as_str(), "Parsed source");
        }

        Ok(unit)
    }

    fn supports_path(&self, path: &str) -> bool {
        SUPPORTED_SUFFIXES.iter().any(|suffix| path.ends_with(suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::infrastructure::node_kinds;

    #[test]
    fn test_parse_class() {
        let parser = TypeScriptParser::new();
        let unit = parser.parse("class Foo {}", "foo.ts").unwrap();

        assert_eq!(unit.dialect, Dialect::TypeScript);
        assert_eq!(unit.root().kind(), node_kinds::PROGRAM);
        assert_eq!(unit.root().child(0).unwrap().kind(), node_kinds::CLASS_DECLARATION);
        assert!(!unit.has_errors());
    }

    #[test]
    fn test_parse_tsx() {
        let source = "class View { render() { return <div />; } }";

        let unit = TypeScriptParser::new().parse(source, "view.tsx").unwrap();
        assert_eq!(unit.dialect, Dialect::Tsx);
        assert!(!unit.has_errors());

        let unit = TypeScriptParser::with_dialect(Dialect::Tsx)
            .parse(source, "view.ts")
            .unwrap();
        assert_eq!(unit.dialect, Dialect::Tsx);
        assert!(!unit.has_errors());
    }

    #[test]
    fn test_syntax_errors_are_not_failures() {
        let parser = TypeScriptParser::new();
        let unit = parser.parse("class {{{", "broken.ts").unwrap();
        assert!(unit.has_errors());
        assert!(unit.error_count() > 0);
    }

    #[test]
    fn test_supports_path() {
        let parser = TypeScriptParser::new();
        assert!(parser.supports_path("a.ts"));
        assert!(parser.supports_path("a.tsx"));
        assert!(parser.supports_path("lib.d.ts"));
        assert!(!parser.supports_path("a.js"));
        assert!(!parser.supports_path("tsconfig.json"));
    }
}
