//! Type Model
//!
//! Syntactic view of a TypeScript type annotation. Every value keeps the
//! verbatim annotation text plus a coarse structural kind; nothing here is
//! resolved or checked.
//!
//! - `PrimaryType`: a single, non-compound annotation (`string`, `Foo<T>`, `[A, B]`, ...)
//! - `UnionOrIntersectionType`: `A | B` / `A & B`, branches in declaration order

use serde::{Deserialize, Serialize};

/// Display text of an annotation that fell through classification
pub const IMPLICIT_ANY_TEXT: &str = "any";

/// Display text used for inline object types (`{ a: string }`)
pub const TYPE_LITERAL_TEXT: &str = "TypeLiteral";

/// Structural kind of a primary type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimaryTypeKind {
    ImplicitAny,
    PredefinedType,
    TypeReference,
    ObjectType,
    ArrayType,
    TupleType,
    TypeQuery,
    ThisType,
}

/// Compound kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnionOrIntersectionKind {
    Union,
    Intersection,
}

/// Non-compound type annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryType {
    /// Verbatim annotation text
    pub text: String,

    pub kind: PrimaryTypeKind,

    /// Bare referenced name, only set for `TypeReference` (`ns.Foo<T>` -> `Foo`)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,

    /// Qualifier of a qualified reference (`ns.Foo` -> `ns`)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub namespace: Option<String>,

    /// Generic arguments (references), element types (tuples, arrays)
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub type_arguments: Vec<Type>,
}

impl PrimaryType {
    pub fn new(text: impl Into<String>, kind: PrimaryTypeKind) -> Self {
        Self {
            text: text.into(),
            kind,
            name: None,
            namespace: None,
            type_arguments: Vec::new(),
        }
    }

    /// Fallback for missing or unrecognized annotations
    pub fn implicit_any() -> Self {
        Self::new(IMPLICIT_ANY_TEXT, PrimaryTypeKind::ImplicitAny)
    }

    pub fn predefined(text: impl Into<String>) -> Self {
        Self::new(text, PrimaryTypeKind::PredefinedType)
    }

    pub fn object_literal() -> Self {
        Self::new(TYPE_LITERAL_TEXT, PrimaryTypeKind::ObjectType)
    }

    /// Named reference with optional generic arguments
    pub fn reference(
        text: impl Into<String>,
        name: impl Into<String>,
        type_arguments: Vec<Type>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            type_arguments,
            ..Self::new(text, PrimaryTypeKind::TypeReference)
        }
    }

    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        self.namespace = namespace;
        self
    }

    pub fn with_type_arguments(mut self, type_arguments: Vec<Type>) -> Self {
        self.type_arguments = type_arguments;
        self
    }
}

/// `A | B` or `A & B`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionOrIntersectionType {
    pub text: String,
    pub kind: UnionOrIntersectionKind,
    pub types: Vec<Type>,
}

impl UnionOrIntersectionType {
    pub fn new(text: impl Into<String>, kind: UnionOrIntersectionKind, types: Vec<Type>) -> Self {
        Self {
            text: text.into(),
            kind,
            types,
        }
    }
}

/// A classified type annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "camelCase")]
pub enum Type {
    Primary(PrimaryType),
    UnionOrIntersection(UnionOrIntersectionType),
}

impl Type {
    /// Verbatim annotation text
    pub fn text(&self) -> &str {
        match self {
            Type::Primary(t) => &t.text,
            Type::UnionOrIntersection(t) => &t.text,
        }
    }

    pub fn as_primary(&self) -> Option<&PrimaryType> {
        match self {
            Type::Primary(t) => Some(t),
            Type::UnionOrIntersection(_) => None,
        }
    }

    pub fn primary_kind(&self) -> Option<PrimaryTypeKind> {
        self.as_primary().map(|t| t.kind)
    }

    pub fn is_implicit_any(&self) -> bool {
        self.primary_kind() == Some(PrimaryTypeKind::ImplicitAny)
    }

    /// Nested types: generic/element arguments or compound branches
    pub fn children(&self) -> &[Type] {
        match self {
            Type::Primary(t) => &t.type_arguments,
            Type::UnionOrIntersection(t) => &t.types,
        }
    }
}

impl From<PrimaryType> for Type {
    fn from(t: PrimaryType) -> Self {
        Type::Primary(t)
    }
}

impl From<UnionOrIntersectionType> for Type {
    fn from(t: UnionOrIntersectionType) -> Self {
        Type::UnionOrIntersection(t)
    }
}
