//! Node model (class / interface entity)

use super::property::{FunctionProperty, VariableProperty};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Classification tag for nodes and variable members
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stereotype {
    #[default]
    None,
    Interface,
    Abstract,
    Get,
    Set,
    GetSet,
}

impl Stereotype {
    /// Combine an accessor with an existing member of the same name.
    ///
    /// Get + Set (either order) pairs into GetSet; anything else keeps the
    /// incoming accessor's stereotype.
    pub fn pair_accessor(existing: Option<Stereotype>, incoming: Stereotype) -> Stereotype {
        match (existing, incoming) {
            (Some(Stereotype::Set | Stereotype::GetSet), Stereotype::Get) => Stereotype::GetSet,
            (Some(Stereotype::Get | Stereotype::GetSet), Stereotype::Set) => Stereotype::GetSet,
            (_, incoming) => incoming,
        }
    }
}

/// Class or interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub stereotype: Stereotype,
    #[serde(default)]
    pub variables: IndexMap<String, VariableProperty>,
    #[serde(default)]
    pub methods: IndexMap<String, FunctionProperty>,
}

impl Node {
    pub fn new(name: impl Into<String>, stereotype: Stereotype) -> Self {
        Self {
            name: name.into(),
            stereotype,
            variables: IndexMap::new(),
            methods: IndexMap::new(),
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, Stereotype::None)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, Stereotype::Interface)
    }

    pub fn is_interface(&self) -> bool {
        self.stereotype == Stereotype::Interface
    }

    /// Insert or overwrite a variable (last wins)
    pub fn add_variable(&mut self, variable: VariableProperty) {
        self.variables.insert(variable.name.clone(), variable);
    }

    /// Insert or overwrite a method (last wins)
    pub fn add_method(&mut self, method: FunctionProperty) {
        self.methods.insert(method.name.clone(), method);
    }

    pub fn variable(&self, name: &str) -> Option<&VariableProperty> {
        self.variables.get(name)
    }

    pub fn method(&self, name: &str) -> Option<&FunctionProperty> {
        self.methods.get(name)
    }

    pub fn has_members(&self) -> bool {
        !self.variables.is_empty() || !self.methods.is_empty()
    }
}
