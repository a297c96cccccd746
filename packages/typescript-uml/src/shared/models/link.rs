//! Directed relationships between nodes

use serde::{Deserialize, Serialize};
use std::fmt;

/// A directed (from, to) node-name pair
pub trait Link {
    fn from_name(&self) -> &str;
    fn to_name(&self) -> &str;

    /// True when either endpoint is `name`
    fn touches(&self, name: &str) -> bool {
        self.from_name() == name || self.to_name() == name
    }
}

/// "references the type of"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Association {
    pub from: String,
    pub to: String,
}

impl Association {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn reverse(&self) -> Self {
        Self::new(self.to.clone(), self.from.clone())
    }

    pub fn is_self_reference(&self) -> bool {
        self.from == self.to
    }
}

impl Link for Association {
    fn from_name(&self) -> &str {
        &self.from
    }

    fn to_name(&self) -> &str {
        &self.to
    }
}

impl fmt::Display for Association {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Association({} -> {})", self.from, self.to)
    }
}

/// "inherits from / implements"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Generalization {
    pub from: String,
    pub to: String,
}

impl Generalization {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl Link for Generalization {
    fn from_name(&self) -> &str {
        &self.from
    }

    fn to_name(&self) -> &str {
        &self.to
    }
}

impl fmt::Display for Generalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generalization({} -> {})", self.from, self.to)
    }
}
