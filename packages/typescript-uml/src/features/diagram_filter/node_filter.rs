//! Include / exclude filtering over node names
//!
//! Rules:
//! - include given: only named nodes survive (an empty list keeps nothing)
//! - exclude given: named nodes are removed; exclude wins over include
//! - a link survives only when both endpoints survive as nodes
//! - no policy: the model is copied unchanged
//!
//! The source model is never mutated.

use std::collections::HashSet;

use tracing::debug;

use crate::shared::models::{CodeModel, Link};

/// Node-name policy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeFilter {
    include: Option<HashSet<String>>,
    exclude: HashSet<String>,
}

impl NodeFilter {
    pub fn new<S: AsRef<str>>(include: Option<&[S]>, exclude: Option<&[S]>) -> Self {
        let to_set = |names: &[S]| -> HashSet<String> {
            names.iter().map(|n| n.as_ref().to_string()).collect()
        };
        Self {
            include: include.map(to_set),
            exclude: exclude.map(to_set).unwrap_or_default(),
        }
    }

    /// True when no policy is set and `apply` copies the model unchanged
    pub fn is_passthrough(&self) -> bool {
        self.include.is_none() && self.exclude.is_empty()
    }

    /// Whether a node name passes the policy
    pub fn keeps(&self, name: &str) -> bool {
        let included = self
            .include
            .as_ref()
            .map_or(true, |include| include.contains(name));
        included && !self.exclude.contains(name)
    }

    /// Derive a filtered copy of `model`
    pub fn apply(&self, model: &CodeModel) -> CodeModel {
        if self.is_passthrough() {
            return model.clone();
        }

        let mut filtered = CodeModel::new();
        for node in model.nodes().filter(|n| self.keeps(&n.name)) {
            filtered.declare_node(node.clone());
        }

        for association in model.associations() {
            if endpoints_survive(association, &filtered) {
                filtered.add_association(association.clone());
            }
        }
        for generalization in model.generalizations() {
            if endpoints_survive(generalization, &filtered) {
                filtered.add_generalization(generalization.clone());
            }
        }

        debug!(
            "Filtered model: {}/{} nodes, {}/{} associations, {}/{} generalizations",
            filtered.node_count(),
            model.node_count(),
            filtered.association_count(),
            model.association_count(),
            filtered.generalization_count(),
            model.generalization_count()
        );
        filtered
    }
}

fn endpoints_survive(link: &impl Link, filtered: &CodeModel) -> bool {
    filtered.contains_node(link.from_name()) && filtered.contains_node(link.to_name())
}

/// Filter `model` by include / exclude node names
pub fn filter_model<S: AsRef<str>>(
    model: &CodeModel,
    include: Option<&[S]>,
    exclude: Option<&[S]>,
) -> CodeModel {
    NodeFilter::new(include, exclude).apply(model)
}
