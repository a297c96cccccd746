//! Syntax-tree extractors (tree-sitter)

pub mod heritage;
pub mod members;
pub mod type_classifier;

pub use heritage::{extract_heritage, HeritageKind, HeritageRef};
pub use members::{extract_member, resolve_accessibility, Member};
pub use type_classifier::{classify, classify_annotation, classify_or_implicit_any};
