/*
 * typescript-uml - UML class diagrams from TypeScript sources
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Code Model (nodes, members, types, links) and tree-sitter helpers
 * - features/    : Vertical slices (parsing → model_builder → diagram_filter → formatting)
 * - config/      : Diagram and parse options, versioned options file
 * - api/         : Entry points used by the `tsuml` binary
 */

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Code Model and shared utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Public entry points
pub mod api;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use api::{generate_class_diagram, parse_file, parse_project, parse_source};
pub use config::{ClassDiagramOptions, Formatter, ParseOptions};
pub use errors::{Result, UmlError};
pub use shared::models::CodeModel;
