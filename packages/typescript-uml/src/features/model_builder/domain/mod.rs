//! Model builder domain logic (parser independent)

mod associations;

pub use associations::{derive_associations, referenced_names};
