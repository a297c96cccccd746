//! JSON Formatter: the serialized Code Model

use crate::errors::Result;
use crate::features::formatting::ports::DiagramFormatter;
use crate::shared::models::CodeModel;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl DiagramFormatter for JsonFormatter {
    fn generate_class_diagram(&self, model: &CodeModel) -> Result<String> {
        Ok(serde_json::to_string_pretty(model)?)
    }

    fn name(&self) -> &'static str {
        "json"
    }
}
