//! Formatting ports

use crate::errors::Result;
use crate::shared::models::CodeModel;

/// Renders a Code Model into a diagram notation
pub trait DiagramFormatter {
    /// Deterministic for a given model content and iteration order
    fn generate_class_diagram(&self, model: &CodeModel) -> Result<String>;

    /// Notation name (`yuml`, `plantuml`, ...)
    fn name(&self) -> &'static str;
}
