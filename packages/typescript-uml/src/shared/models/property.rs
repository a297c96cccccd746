//! Member models: variables, functions, parameters

use super::node::Stereotype;
use super::type_ref::Type;
use serde::{Deserialize, Serialize};

/// Member visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accessibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Accessibility {
    /// Parse an `accessibility_modifier` token
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "public" => Some(Accessibility::Public),
            "protected" => Some(Accessibility::Protected),
            "private" => Some(Accessibility::Private),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Accessibility::Public => "public",
            Accessibility::Protected => "protected",
            Accessibility::Private => "private",
        }
    }

    /// UML visibility symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Accessibility::Public => "+",
            Accessibility::Protected => "#",
            Accessibility::Private => "-",
        }
    }
}

/// Field, accessor, or parameter property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableProperty {
    pub name: String,
    pub accessibility: Accessibility,
    #[serde(rename = "type")]
    pub ty: Type,
    /// Declared with a trailing `?`
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub is_static: bool,
    /// `None`, `Get`, `Set` or `GetSet`
    #[serde(default)]
    pub stereotype: Stereotype,
}

impl VariableProperty {
    pub fn new(name: impl Into<String>, accessibility: Accessibility, ty: Type) -> Self {
        Self {
            name: name.into(),
            accessibility,
            ty,
            optional: false,
            is_static: false,
            stereotype: Stereotype::None,
        }
    }

    pub fn with_stereotype(mut self, stereotype: Stereotype) -> Self {
        self.stereotype = stereotype;
        self
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }
}

/// Method or method signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionProperty {
    pub name: String,
    pub accessibility: Accessibility,
    pub parameters: Vec<Parameter>,
    /// `None` when no return annotation was written (not `void`)
    #[serde(default)]
    pub return_type: Option<Type>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub is_static: bool,
}

impl FunctionProperty {
    pub fn new(name: impl Into<String>, accessibility: Accessibility) -> Self {
        Self {
            name: name.into(),
            accessibility,
            parameters: Vec::new(),
            return_type: None,
            optional: false,
            is_static: false,
        }
    }

    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_return_type(mut self, return_type: Option<Type>) -> Self {
        self.return_type = return_type;
        self
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }
}

/// Function parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type", default)]
    pub ty: Option<Type>,
    /// Marked `?` or has a default initializer
    pub optional: bool,
    /// Verbatim initializer expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_initializer: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: Option<Type>) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            default_initializer: None,
        }
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Attach an initializer; a defaulted parameter is always optional
    pub fn with_default(mut self, initializer: impl Into<String>) -> Self {
        self.default_initializer = Some(initializer.into());
        self.optional = true;
        self
    }
}
