//! Configuration
//!
//! - `options` - ClassDiagramOptions / ParseOptions with defaults
//! - `patch` - all-optional patches merged functionally onto defaults
//! - `io` - versioned YAML / JSON options file
//!
//! # Examples
//!
//! ```rust
//! use typescript_uml::config::{ClassDiagramOptions, ClassDiagramOptionsPatch, Formatter};
//!
//! let patch = ClassDiagramOptionsPatch {
//!     formatter: Some(Formatter::PlantUml),
//!     ..Default::default()
//! };
//! let options = ClassDiagramOptions::from_patch(&patch);
//! assert!(options.plantuml.diagram_tags);
//! ```

pub mod io;
pub mod options;
pub mod patch;

pub use io::OptionsFileV1;
pub use options::{
    ClassDiagramOptions, Formatter, NodeFilterOptions, ParseOptions, PlantUmlOptions,
};
pub use patch::{ClassDiagramOptionsPatch, NodeFilterPatch, PlantUmlPatch};
