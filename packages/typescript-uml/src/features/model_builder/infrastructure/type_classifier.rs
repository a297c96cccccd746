//! TypeScript Type Classifier
//!
//! Maps a type-annotation syntax node onto the Type Model:
//! - Predefined keywords (string, number, void, ...)
//! - Named references, qualified or generic (Foo, ns.Foo, Map<K, V>)
//! - Object literals, arrays, tuples, type queries, `this`
//! - Union / intersection compounds (flattened, declaration order)
//!
//! Anything else degrades to ImplicitAny. Classification never fails.

use tracing::trace;
use tree_sitter::Node;

use crate::features::parsing::node_kinds;
use crate::shared::models::{
    PrimaryType, PrimaryTypeKind, Type, UnionOrIntersectionKind, UnionOrIntersectionType,
};
use crate::shared::utils::tree_sitter::{named_children, node_text, node_text_owned};

/// Classify an annotation that may be absent.
///
/// Accepts either an annotation wrapper (`: T`) or a bare type node.
/// `None` in, `None` out.
pub fn classify_annotation(node: Option<Node>, source: &str) -> Option<Type> {
    let node = node?;
    Some(match unwrap_annotation(node) {
        Some(inner) => classify(inner, source),
        None => PrimaryType::implicit_any().into(),
    })
}

/// Classify an annotation, falling back to ImplicitAny when absent
pub fn classify_or_implicit_any(node: Option<Node>, source: &str) -> Type {
    classify_annotation(node, source).unwrap_or_else(|| PrimaryType::implicit_any().into())
}

/// Classify a type node
pub fn classify(node: Node, source: &str) -> Type {
    let text = node_text(&node, source);

    match node.kind() {
        node_kinds::PREDEFINED_TYPE => PrimaryType::predefined(text).into(),

        // Foo, ns.Foo, Foo<A, B>
        node_kinds::TYPE_IDENTIFIER
        | node_kinds::NESTED_TYPE_IDENTIFIER
        | node_kinds::GENERIC_TYPE => classify_reference(node, source),

        node_kinds::OBJECT_TYPE => PrimaryType::object_literal().into(),

        // Foo[]: the element type is kept as the single type argument
        node_kinds::ARRAY_TYPE => {
            let elements = type_children(node)
                .into_iter()
                .take(1)
                .map(|element| classify(element, source))
                .collect();
            PrimaryType::new(text, PrimaryTypeKind::ArrayType)
                .with_type_arguments(elements)
                .into()
        }

        node_kinds::TUPLE_TYPE => {
            let elements = type_children(node)
                .into_iter()
                .filter_map(tuple_member_type)
                .map(|element| classify(element, source))
                .collect();
            PrimaryType::new(text, PrimaryTypeKind::TupleType)
                .with_type_arguments(elements)
                .into()
        }

        node_kinds::TYPE_QUERY => PrimaryType::new(text, PrimaryTypeKind::TypeQuery).into(),
        node_kinds::THIS_TYPE => PrimaryType::new(text, PrimaryTypeKind::ThisType).into(),

        // null / undefined are keyword types; other literals are not modelled
        node_kinds::LITERAL_TYPE => {
            let is_keyword = type_children(node)
                .iter()
                .any(|c| matches!(c.kind(), node_kinds::NULL | node_kinds::UNDEFINED));
            if is_keyword {
                PrimaryType::predefined(text).into()
            } else {
                implicit_any(node)
            }
        }

        node_kinds::UNION_TYPE => {
            classify_compound(node, source, UnionOrIntersectionKind::Union)
        }
        node_kinds::INTERSECTION_TYPE => {
            classify_compound(node, source, UnionOrIntersectionKind::Intersection)
        }

        // (A | B), readonly Foo[]
        node_kinds::PARENTHESIZED_TYPE | node_kinds::READONLY_TYPE => {
            match type_children(node).into_iter().next() {
                Some(inner) => classify(inner, source),
                None => implicit_any(node),
            }
        }

        _ => implicit_any(node),
    }
}

/// Resolve a reference-like node to its bare name and optional qualifier.
///
/// Works on type positions (`ns.Foo<T>`) and on expression positions
/// (`extends ns.Base`). Returns `None` for anything that is not a plain
/// or qualified name.
pub fn resolve_reference_name(node: Node, source: &str) -> Option<(String, Option<String>)> {
    match node.kind() {
        node_kinds::TYPE_IDENTIFIER | node_kinds::IDENTIFIER => {
            Some((node_text_owned(&node, source), None))
        }
        node_kinds::NESTED_TYPE_IDENTIFIER => {
            let name = node.child_by_field_name("name")?;
            let module = node
                .child_by_field_name("module")
                .map(|m| node_text_owned(&m, source));
            Some((node_text_owned(&name, source), module))
        }
        node_kinds::MEMBER_EXPRESSION => {
            let property = node.child_by_field_name("property")?;
            let object = node
                .child_by_field_name("object")
                .map(|o| node_text_owned(&o, source));
            Some((node_text_owned(&property, source), object))
        }
        node_kinds::GENERIC_TYPE => {
            let name = node.child_by_field_name("name")?;
            resolve_reference_name(name, source)
        }
        _ => None,
    }
}

fn classify_reference(node: Node, source: &str) -> Type {
    let Some((name, namespace)) = resolve_reference_name(node, source) else {
        return implicit_any(node);
    };

    let type_arguments = node
        .child_by_field_name("type_arguments")
        .map(|args| {
            type_children(args)
                .into_iter()
                .map(|arg| classify(arg, source))
                .collect()
        })
        .unwrap_or_default();

    PrimaryType::reference(node_text(&node, source), name, type_arguments)
        .with_namespace(namespace)
        .into()
}

fn classify_compound(node: Node, source: &str, kind: UnionOrIntersectionKind) -> Type {
    let mut branches = Vec::new();
    collect_branches(node, node.kind(), &mut branches);

    let types = branches
        .into_iter()
        .map(|branch| classify(branch, source))
        .collect();

    UnionOrIntersectionType::new(node_text(&node, source), kind, types).into()
}

/// The grammar nests `A | B | C` as `(A | B) | C`; flatten same-kind nesting
fn collect_branches<'t>(node: Node<'t>, kind: &str, out: &mut Vec<Node<'t>>) {
    for child in type_children(node) {
        if child.kind() == kind {
            collect_branches(child, kind, out);
        } else {
            out.push(child);
        }
    }
}

/// Element type of a tuple member (`name: T`, `T?`, `...T[]`, or `T`)
fn tuple_member_type(member: Node) -> Option<Node> {
    match member.kind() {
        node_kinds::REQUIRED_PARAMETER | node_kinds::OPTIONAL_PARAMETER => member
            .child_by_field_name("type")
            .and_then(unwrap_annotation),
        node_kinds::OPTIONAL_TYPE | node_kinds::REST_TYPE => {
            type_children(member).into_iter().next()
        }
        _ => Some(member),
    }
}

/// Strip the `: ` wrapper of an annotation node
fn unwrap_annotation(node: Node) -> Option<Node> {
    if node_kinds::is_return_annotation(node.kind()) {
        type_children(node).into_iter().next()
    } else {
        Some(node)
    }
}

/// Named children minus comments
fn type_children(node: Node) -> Vec<Node> {
    named_children(&node)
        .into_iter()
        .filter(|child| !child.is_extra())
        .collect()
}

fn implicit_any(node: Node) -> Type {
    trace!(kind = node.kind(), "Unrecognized type syntax, using implicit any");
    PrimaryType::implicit_any().into()
}
