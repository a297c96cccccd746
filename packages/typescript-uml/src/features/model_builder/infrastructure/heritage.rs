//! Heritage clause extraction
//!
//! `class A extends B implements C, D` / `interface I extends J, K`.
//! Each referenced type resolves to its bare name (`ns.Base<T>` -> `Base`).

use tracing::trace;
use tree_sitter::Node;

use super::type_classifier::resolve_reference_name;
use crate::features::parsing::node_kinds;
use crate::shared::models::Stereotype;
use crate::shared::utils::tree_sitter::{find_child_by_kind, named_children};

/// Which clause a reference came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeritageKind {
    Extends,
    Implements,
}

/// One referenced supertype
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeritageRef {
    pub name: String,
    pub kind: HeritageKind,
}

impl HeritageRef {
    /// Stereotype of the placeholder node created for an unseen supertype.
    ///
    /// An interface's `extends` target is taken to be an interface.
    pub fn placeholder_stereotype(&self, declared_by_interface: bool) -> Stereotype {
        match self.kind {
            HeritageKind::Implements => Stereotype::Interface,
            HeritageKind::Extends if declared_by_interface => Stereotype::Interface,
            HeritageKind::Extends => Stereotype::None,
        }
    }
}

/// Collect heritage references of a class or interface declaration, in
/// source order
pub fn extract_heritage(declaration: Node, source: &str) -> Vec<HeritageRef> {
    let mut refs = Vec::new();

    // class_declaration / abstract_class_declaration
    if let Some(heritage) = find_child_by_kind(&declaration, node_kinds::CLASS_HERITAGE) {
        for clause in named_children(&heritage) {
            match clause.kind() {
                node_kinds::EXTENDS_CLAUSE => {
                    collect_extends_values(clause, source, &mut refs);
                }
                node_kinds::IMPLEMENTS_CLAUSE => {
                    collect_types(clause, source, HeritageKind::Implements, &mut refs);
                }
                _ => {}
            }
        }
    }

    // interface_declaration
    for kind in [node_kinds::EXTENDS_TYPE_CLAUSE, node_kinds::EXTENDS_CLAUSE] {
        if let Some(clause) = find_child_by_kind(&declaration, kind) {
            collect_types(clause, source, HeritageKind::Extends, &mut refs);
        }
    }

    refs
}

/// `extends` on a class takes expressions (`Base`, `ns.Base`, `Mixin(Base)`)
fn collect_extends_values(clause: Node, source: &str, refs: &mut Vec<HeritageRef>) {
    let mut cursor = clause.walk();
    let values: Vec<Node> = clause.children_by_field_name("value", &mut cursor).collect();

    // Older grammar revisions do not tag the expression with a field
    let values = if values.is_empty() {
        named_children(&clause)
            .into_iter()
            .filter(|c| !c.is_extra() && c.kind() != node_kinds::TYPE_ARGUMENTS)
            .collect()
    } else {
        values
    };

    for value in values {
        push_reference(value, source, HeritageKind::Extends, refs);
    }
}

/// `implements A, B<T>` / interface `extends A, ns.B`
fn collect_types(clause: Node, source: &str, kind: HeritageKind, refs: &mut Vec<HeritageRef>) {
    for child in named_children(&clause) {
        if !child.is_extra() {
            push_reference(child, source, kind, refs);
        }
    }
}

fn push_reference(node: Node, source: &str, kind: HeritageKind, refs: &mut Vec<HeritageRef>) {
    match resolve_reference_name(node, source) {
        Some((name, _)) => refs.push(HeritageRef { name, kind }),
        None => trace!(kind = node.kind(), "Skipping unresolvable heritage expression"),
    }
}
