//! Tree-sitter Utility Functions
//!
//! Node traversal and text helpers shared by the parser and the model builder.

use tree_sitter::Node;

// ═══════════════════════════════════════════════════════════════════════════
// Node Traversal Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Find a direct child node by kind (named or anonymous)
#[inline]
pub fn find_child_by_kind<'t>(node: &Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}

/// Direct children, anonymous tokens included
pub fn children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).collect()
}

/// Direct named children
pub fn named_children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

/// Check whether a direct child of the given kind exists
#[inline]
pub fn has_child_kind(node: &Node, kind: &str) -> bool {
    find_child_by_kind(node, kind).is_some()
}

/// Pre-order traversal with an explicit stack.
///
/// Visits the same sequence as a recursive depth-first walk without
/// growing the call stack on deeply nested sources.
pub fn walk_preorder<'t, F>(root: Node<'t>, mut visit: F)
where
    F: FnMut(Node<'t>),
{
    let mut stack = vec![root];
    while let Some(current) = stack.pop() {
        visit(current);
        for i in (0..current.child_count()).rev() {
            if let Some(child) = current.child(i) {
                stack.push(child);
            }
        }
    }
}

/// Count ERROR and MISSING nodes below `root`
pub fn count_syntax_errors(root: Node) -> usize {
    if !root.has_error() {
        return 0;
    }
    let mut count = 0;
    walk_preorder(root, |node| {
        if node.is_error() || node.is_missing() {
            count += 1;
        }
    });
    count
}

// ═══════════════════════════════════════════════════════════════════════════
// Text Extraction Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Extract text content from a node
#[inline]
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    source
        .get(node.start_byte()..node.end_byte())
        .unwrap_or_default()
}

/// Extract text content from a node as owned String
#[inline]
pub fn node_text_owned(node: &Node, source: &str) -> String {
    node_text(node, source).to_string()
}

/// Text of a field child, if the field is present
pub fn field_text(node: &Node, field: &str, source: &str) -> Option<String> {
    node.child_by_field_name(field)
        .map(|child| node_text_owned(&child, source))
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
