//! Model builder use cases

mod build_model;

pub use build_model::{build_model, BuildStats, ModelBuilder};
