//! Diagram formatting
//!
//! Pure renderers from a Code Model to diagram text. `create_formatter`
//! picks one from `ClassDiagramOptions`.

pub mod infrastructure;
pub mod ports;

pub use infrastructure::{JsonFormatter, PlantUmlFormatter, YumlFormatter};
pub use ports::DiagramFormatter;

use crate::config::{ClassDiagramOptions, Formatter};

pub fn create_formatter(options: &ClassDiagramOptions) -> Box<dyn DiagramFormatter> {
    match options.formatter {
        Formatter::Yuml => Box::new(YumlFormatter::new()),
        Formatter::PlantUml => Box::new(PlantUmlFormatter::new(options.plantuml.diagram_tags)),
        Formatter::Json => Box::new(JsonFormatter::new()),
    }
}
