//! Model Builder Feature
//!
//! Syntax tree -> Code Model.
//!
//! ## Structure
//! - `domain/` - association derivation over classified types
//! - `infrastructure/` - type classification, heritage and member extraction
//! - `application/` - ModelBuilder (tree walk and merge into the model)

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{build_model, BuildStats, ModelBuilder};
pub use domain::derive_associations;
