//! Integration tests for typescript-uml
//!
//! Run: cargo test --test integration

mod formatting;
mod model_building;
mod project;
