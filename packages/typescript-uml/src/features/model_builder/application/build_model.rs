//! Build model use case
//!
//! Walks one parsed source unit and merges what it declares into a shared
//! Code Model. The walk is pre-order over the whole tree, so nested
//! declarations (a class declared inside a function, a namespace body)
//! are found as well as top-level ones.

use tracing::{debug, trace};
use tree_sitter::Node as SyntaxNode;

use crate::features::model_builder::domain::derive_associations;
use crate::features::model_builder::infrastructure::{extract_heritage, extract_member, Member};
use crate::features::parsing::{node_kinds, SourceUnit};
use crate::shared::models::{CodeModel, Generalization, Node, Stereotype};
use crate::shared::utils::tree_sitter::{named_children, node_text_owned, walk_preorder};

/// Counters for one build pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub declarations: usize,
    pub placeholders: usize,
    pub members: usize,
    pub associations: usize,
    pub generalizations: usize,
}

/// Single-writer builder over a borrowed Code Model
pub struct ModelBuilder<'m> {
    model: &'m mut CodeModel,
    stats: BuildStats,
}

impl<'m> ModelBuilder<'m> {
    pub fn new(model: &'m mut CodeModel) -> Self {
        Self {
            model,
            stats: BuildStats::default(),
        }
    }

    /// Walk the whole unit; never fails
    pub fn build(mut self, unit: &SourceUnit) -> BuildStats {
        let source = unit.source.as_str();
        walk_preorder(unit.root(), |node| self.visit(node, source));

        debug!(
            "Built {}: {} declarations, {} placeholders, {} members, {} new associations, {} new generalizations",
            unit.file_path,
            self.stats.declarations,
            self.stats.placeholders,
            self.stats.members,
            self.stats.associations,
            self.stats.generalizations
        );
        self.stats
    }

    fn visit(&mut self, node: SyntaxNode, source: &str) {
        match node.kind() {
            node_kinds::CLASS_DECLARATION => self.declare(node, source, Stereotype::None),
            node_kinds::ABSTRACT_CLASS_DECLARATION => {
                self.declare(node, source, Stereotype::Abstract)
            }
            node_kinds::INTERFACE_DECLARATION => self.declare(node, source, Stereotype::Interface),
            _ => {}
        }
    }

    /// Class, abstract class, or interface declaration
    fn declare(&mut self, declaration: SyntaxNode, source: &str, stereotype: Stereotype) {
        let Some(name) = declaration
            .child_by_field_name("name")
            .map(|n| node_text_owned(&n, source))
        else {
            trace!("Skipping anonymous {}", declaration.kind());
            return;
        };

        debug!(name = %name, stereotype = ?stereotype, "Declaring node");
        self.model.declare_node(Node::new(name.as_str(), stereotype));
        self.stats.declarations += 1;

        self.resolve_heritage(declaration, source, &name, stereotype == Stereotype::Interface);

        if let Some(body) = declaration.child_by_field_name("body") {
            for child in named_children(&body) {
                if let Some(member) = extract_member(child, source) {
                    self.add_member(&name, member);
                }
            }
        }
    }

    fn resolve_heritage(
        &mut self,
        declaration: SyntaxNode,
        source: &str,
        name: &str,
        is_interface: bool,
    ) {
        for reference in extract_heritage(declaration, source) {
            let placeholder = reference.placeholder_stereotype(is_interface);
            if self.model.ensure_node(&reference.name, placeholder) {
                trace!("Placeholder node {} ({:?})", reference.name, placeholder);
                self.stats.placeholders += 1;
            }
            if self
                .model
                .add_generalization(Generalization::new(name, reference.name.as_str()))
            {
                self.stats.generalizations += 1;
            }
        }
    }

    fn add_member(&mut self, owner: &str, member: Member) {
        let associations: Vec<_> = member
            .referenced_types()
            .into_iter()
            .flat_map(|ty| derive_associations(owner, ty))
            .collect();

        let Some(node) = self.model.node_mut(owner) else {
            return;
        };

        match member {
            Member::Field(variable) => {
                trace!("{}.{} field", owner, variable.name);
                node.add_variable(variable);
                self.stats.members += 1;
            }
            Member::Accessor(mut variable) => {
                let existing = node.variable(&variable.name).map(|v| v.stereotype);
                variable.stereotype = Stereotype::pair_accessor(existing, variable.stereotype);
                trace!("{}.{} accessor ({:?})", owner, variable.name, variable.stereotype);
                node.add_variable(variable);
                self.stats.members += 1;
            }
            Member::Method(method) => {
                trace!("{}.{}() method", owner, method.name);
                node.add_method(method);
                self.stats.members += 1;
            }
            Member::ParameterProperties(variables) => {
                self.stats.members += variables.len();
                for variable in variables {
                    trace!("{}.{} parameter property", owner, variable.name);
                    node.add_variable(variable);
                }
            }
        }

        for association in associations {
            if self.model.add_association(association) {
                self.stats.associations += 1;
            }
        }
    }
}

/// Walk `unit` into `existing` (or a fresh model) and return the model
pub fn build_model(unit: &SourceUnit, existing: Option<CodeModel>) -> CodeModel {
    let mut model = existing.unwrap_or_default();
    ModelBuilder::new(&mut model).build(unit);
    model
}
