//! Shared models
//!
//! Type Model, Entity Model and Code Model. Pure data; no parser types leak
//! in here.

mod code_model;
mod link;
mod node;
mod property;
mod type_ref;

pub use code_model::CodeModel;
pub use link::{Association, Generalization, Link};
pub use node::{Node, Stereotype};
pub use property::{Accessibility, FunctionProperty, Parameter, VariableProperty};
pub use type_ref::{
    PrimaryType, PrimaryTypeKind, Type, UnionOrIntersectionKind, UnionOrIntersectionType,
    IMPLICIT_ANY_TEXT, TYPE_LITERAL_TEXT,
};
