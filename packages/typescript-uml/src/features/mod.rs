//! Feature modules
//!
//! - `parsing` - TypeScript source to syntax tree
//! - `model_builder` - syntax tree to Code Model
//! - `diagram_filter` - node include / exclude
//! - `formatting` - Code Model to yUML / PlantUML / JSON
//! - `project` - tsconfig.json discovery

pub mod diagram_filter;
pub mod formatting;
pub mod model_builder;
pub mod parsing;
pub mod project;
