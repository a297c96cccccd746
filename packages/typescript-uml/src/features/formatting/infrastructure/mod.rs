pub mod json;
pub mod plantuml;
pub mod yuml;

pub use json::JsonFormatter;
pub use plantuml::PlantUmlFormatter;
pub use yuml::YumlFormatter;
