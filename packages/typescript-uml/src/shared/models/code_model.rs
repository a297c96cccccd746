//! Code Model
//!
//! Aggregate of everything a build pass produced:
//! - nodes keyed by name, in first-declaration order
//! - associations as an insertion-ordered set
//! - generalizations as an insertion-ordered set
//!
//! The model is plain owned data. Builders take `&mut CodeModel`; filters
//! read it and produce a fresh copy.

use super::link::{Association, Generalization, Link};
use super::node::{Node, Stereotype};
use indexmap::map::Entry;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeModel {
    nodes: IndexMap<String, Node>,
    associations: IndexSet<Association>,
    generalizations: IndexSet<Generalization>,
}

impl CodeModel {
    pub fn new() -> Self {
        Self::default()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Nodes
    // ═══════════════════════════════════════════════════════════════════════

    /// Insert a directly declared node, replacing any node of the same name.
    ///
    /// The replaced node's members are discarded; the name keeps its
    /// original position in iteration order.
    pub fn declare_node(&mut self, node: Node) -> &mut Node {
        match self.nodes.entry(node.name.clone()) {
            Entry::Occupied(mut entry) => {
                entry.insert(node);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(node),
        }
    }

    /// Insert a placeholder node unless one of that name already exists.
    ///
    /// Returns `true` when a placeholder was created.
    pub fn ensure_node(&mut self, name: &str, stereotype: Stereotype) -> bool {
        if self.nodes.contains_key(name) {
            return false;
        }
        self.nodes
            .insert(name.to_string(), Node::new(name, stereotype));
        true
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    pub fn node_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.nodes.get_mut(name)
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Nodes in first-insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Links
    // ═══════════════════════════════════════════════════════════════════════

    /// Returns `false` when the pair was already present
    pub fn add_association(&mut self, association: Association) -> bool {
        self.associations.insert(association)
    }

    /// Returns `false` when the pair was already present
    pub fn add_generalization(&mut self, generalization: Generalization) -> bool {
        self.generalizations.insert(generalization)
    }

    pub fn associations(&self) -> impl Iterator<Item = &Association> {
        self.associations.iter()
    }

    pub fn generalizations(&self) -> impl Iterator<Item = &Generalization> {
        self.generalizations.iter()
    }

    pub fn contains_association(&self, association: &Association) -> bool {
        self.associations.contains(association)
    }

    pub fn contains_generalization(&self, generalization: &Generalization) -> bool {
        self.generalizations.contains(generalization)
    }

    /// True when `association` and its reverse are both present
    pub fn is_bidirectional(&self, association: &Association) -> bool {
        !association.is_self_reference() && self.associations.contains(&association.reverse())
    }

    pub fn association_count(&self) -> usize {
        self.associations.len()
    }

    pub fn generalization_count(&self) -> usize {
        self.generalizations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.associations.is_empty() && self.generalizations.is_empty()
    }

    /// (from, to) of every link with an endpoint missing from the node collection
    pub fn dangling_links(&self) -> Vec<(&str, &str)> {
        let associations = self
            .associations
            .iter()
            .map(|a| (a.from_name(), a.to_name()));
        let generalizations = self
            .generalizations
            .iter()
            .map(|g| (g.from_name(), g.to_name()));

        associations
            .chain(generalizations)
            .filter(|(from, to)| !self.contains_node(from) || !self.contains_node(to))
            .collect()
    }
}
