//! Class / interface member extraction
//!
//! Recognized member forms:
//! - fields (`public_field_definition`) and property signatures
//! - methods, method signatures, abstract method signatures
//! - `get` / `set` accessors (definitions and signatures)
//! - constructor parameter properties (`constructor(private repo: Repo)`)
//!
//! Everything else in a body (index signatures, static blocks, call
//! signatures, ...) has no model effect.

use tree_sitter::Node;

use super::type_classifier::{classify_annotation, classify_or_implicit_any};
use crate::features::parsing::node_kinds;
use crate::shared::models::{
    Accessibility, FunctionProperty, Parameter, PrimaryType, Stereotype, Type, VariableProperty,
};
use crate::shared::utils::tree_sitter::{
    children, find_child_by_kind, has_child_kind, named_children, node_text, node_text_owned,
};

/// A member in model form, before it is merged into its owning node
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    /// Field or property signature
    Field(VariableProperty),
    /// Getter or setter; stereotype is `Get` or `Set`
    Accessor(VariableProperty),
    /// Method or method signature
    Method(FunctionProperty),
    /// Parameter properties declared by a constructor
    ParameterProperties(Vec<VariableProperty>),
}

impl Member {
    /// Types that feed association derivation, in declaration order
    pub fn referenced_types(&self) -> Vec<&Type> {
        match self {
            Member::Field(v) | Member::Accessor(v) => vec![&v.ty],
            Member::ParameterProperties(vs) => vs.iter().map(|v| &v.ty).collect(),
            Member::Method(m) => m
                .parameters
                .iter()
                .filter_map(|p| p.ty.as_ref())
                .chain(m.return_type.as_ref())
                .collect(),
        }
    }
}

/// Extract a member from a class or interface body child
pub fn extract_member(node: Node, source: &str) -> Option<Member> {
    match node.kind() {
        node_kinds::PUBLIC_FIELD_DEFINITION | node_kinds::PROPERTY_SIGNATURE => {
            extract_field(node, source).map(Member::Field)
        }
        node_kinds::METHOD_DEFINITION
        | node_kinds::METHOD_SIGNATURE
        | node_kinds::ABSTRACT_METHOD_SIGNATURE => extract_callable(node, source),
        _ => None,
    }
}

/// Resolve member accessibility.
///
/// The last accessibility modifier wins; without one, `#private` names are
/// Private and everything else is Public.
pub fn resolve_accessibility(node: Node, source: &str) -> Accessibility {
    let declared = children(&node)
        .into_iter()
        .filter(|c| c.kind() == node_kinds::ACCESSIBILITY_MODIFIER)
        .filter_map(|c| Accessibility::from_keyword(node_text(&c, source).trim()))
        .last();

    declared.unwrap_or_else(|| {
        let is_private_name = node
            .child_by_field_name("name")
            .map(|n| n.kind() == node_kinds::PRIVATE_PROPERTY_IDENTIFIER)
            .unwrap_or(false);
        if is_private_name {
            Accessibility::Private
        } else {
            Accessibility::Public
        }
    })
}

fn extract_field(node: Node, source: &str) -> Option<VariableProperty> {
    let name = member_name(node, source)?;
    let ty = classify_or_implicit_any(node.child_by_field_name("type"), source);

    Some(
        VariableProperty::new(name, resolve_accessibility(node, source), ty)
            .with_optional(has_token(node, node_kinds::OPTIONAL_MARK))
            .with_static(has_token(node, node_kinds::STATIC)),
    )
}

fn extract_callable(node: Node, source: &str) -> Option<Member> {
    let name = member_name(node, source)?;
    let accessibility = resolve_accessibility(node, source);
    let is_static = has_token(node, node_kinds::STATIC);

    if has_token(node, node_kinds::GET) {
        let ty = classify_or_implicit_any(node.child_by_field_name("return_type"), source);
        return Some(Member::Accessor(
            VariableProperty::new(name, accessibility, ty)
                .with_stereotype(Stereotype::Get)
                .with_static(is_static),
        ));
    }

    if has_token(node, node_kinds::SET) {
        let ty = extract_parameters(node, source)
            .into_iter()
            .next()
            .and_then(|p| p.ty)
            .unwrap_or_else(|| PrimaryType::implicit_any().into());
        return Some(Member::Accessor(
            VariableProperty::new(name, accessibility, ty)
                .with_stereotype(Stereotype::Set)
                .with_static(is_static),
        ));
    }

    if name == node_kinds::CONSTRUCTOR_NAME {
        // Overload signatures cannot declare parameter properties
        if node.kind() != node_kinds::METHOD_DEFINITION {
            return None;
        }
        return Some(Member::ParameterProperties(extract_parameter_properties(
            node, source,
        )));
    }

    let method = FunctionProperty::new(name, accessibility)
        .with_parameters(extract_parameters(node, source))
        .with_return_type(classify_annotation(
            node.child_by_field_name("return_type"),
            source,
        ))
        .with_optional(has_token(node, node_kinds::OPTIONAL_MARK))
        .with_static(is_static);

    Some(Member::Method(method))
}

/// Ordered parameter list of a callable member
pub fn extract_parameters(node: Node, source: &str) -> Vec<Parameter> {
    parameter_nodes(node)
        .into_iter()
        .filter_map(|param| extract_parameter(param, source))
        .collect()
}

fn extract_parameter(param: Node, source: &str) -> Option<Parameter> {
    let pattern = param.child_by_field_name("pattern")?;
    // `this` parameters only annotate the receiver
    if pattern.kind() == node_kinds::THIS {
        return None;
    }

    let name = parameter_name(pattern, source);
    let ty = classify_or_implicit_any(param.child_by_field_name("type"), source);
    let parameter = Parameter::new(name, Some(ty))
        .with_optional(param.kind() == node_kinds::OPTIONAL_PARAMETER);

    Some(match param.child_by_field_name("value") {
        Some(value) => parameter.with_default(node_text(&value, source)),
        None => parameter,
    })
}

/// Constructor parameters promoted to fields by an accessibility or
/// `readonly` modifier
fn extract_parameter_properties(node: Node, source: &str) -> Vec<VariableProperty> {
    parameter_nodes(node)
        .into_iter()
        .filter(|param| {
            has_child_kind(param, node_kinds::ACCESSIBILITY_MODIFIER)
                || has_token(*param, node_kinds::READONLY)
        })
        .filter_map(|param| {
            let pattern = param.child_by_field_name("pattern")?;
            let ty = classify_or_implicit_any(param.child_by_field_name("type"), source);
            Some(
                VariableProperty::new(
                    parameter_name(pattern, source),
                    resolve_accessibility(param, source),
                    ty,
                )
                .with_optional(param.kind() == node_kinds::OPTIONAL_PARAMETER),
            )
        })
        .collect()
}

fn parameter_nodes(node: Node) -> Vec<Node> {
    node.child_by_field_name("parameters")
        .or_else(|| find_child_by_kind(&node, node_kinds::FORMAL_PARAMETERS))
        .map(|params| {
            named_children(&params)
                .into_iter()
                .filter(|p| {
                    matches!(
                        p.kind(),
                        node_kinds::REQUIRED_PARAMETER | node_kinds::OPTIONAL_PARAMETER
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}

/// `...rest` is reported as `rest`; destructuring patterns keep their text
fn parameter_name(pattern: Node, source: &str) -> String {
    if pattern.kind() == node_kinds::REST_PATTERN {
        if let Some(inner) = named_children(&pattern).into_iter().next() {
            return node_text_owned(&inner, source);
        }
    }
    node_text_owned(&pattern, source)
}

fn member_name(node: Node, source: &str) -> Option<String> {
    node.child_by_field_name("name")
        .map(|n| node_text_owned(&n, source))
}

/// Anonymous keyword token (`static`, `get`, `?`, ...) directly on the node
fn has_token(node: Node, kind: &str) -> bool {
    children(&node)
        .iter()
        .any(|c| !c.is_named() && c.kind() == kind)
}
