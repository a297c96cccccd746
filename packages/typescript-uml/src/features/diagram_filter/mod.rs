//! Diagram Filter Feature
//!
//! Narrows a built Code Model to the nodes a diagram should show.

mod node_filter;

pub use node_filter::{filter_model, NodeFilter};
