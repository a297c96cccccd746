//! TypeScript tree-sitter node kinds
//!
//! These constants match the node type names of the tree-sitter-typescript
//! grammar. Only the kinds the model builder dispatches on are listed.

// Program structure
pub const PROGRAM: &str = "program";

// Declarations
pub const CLASS_DECLARATION: &str = "class_declaration";
pub const ABSTRACT_CLASS_DECLARATION: &str = "abstract_class_declaration";
pub const INTERFACE_DECLARATION: &str = "interface_declaration";

// Heritage
pub const CLASS_HERITAGE: &str = "class_heritage";
pub const EXTENDS_CLAUSE: &str = "extends_clause";
pub const IMPLEMENTS_CLAUSE: &str = "implements_clause";
pub const EXTENDS_TYPE_CLAUSE: &str = "extends_type_clause";

// Bodies
pub const CLASS_BODY: &str = "class_body";
pub const INTERFACE_BODY: &str = "interface_body";

// Class and interface members
pub const PUBLIC_FIELD_DEFINITION: &str = "public_field_definition";
pub const METHOD_DEFINITION: &str = "method_definition";
pub const METHOD_SIGNATURE: &str = "method_signature";
pub const ABSTRACT_METHOD_SIGNATURE: &str = "abstract_method_signature";
pub const PROPERTY_SIGNATURE: &str = "property_signature";

// Parameters
pub const FORMAL_PARAMETERS: &str = "formal_parameters";
pub const REQUIRED_PARAMETER: &str = "required_parameter";
pub const OPTIONAL_PARAMETER: &str = "optional_parameter";
pub const REST_PATTERN: &str = "rest_pattern";

// Type annotations
pub const TYPE_ANNOTATION: &str = "type_annotation";
pub const ASSERTS_ANNOTATION: &str = "asserts_annotation";
pub const TYPE_PREDICATE_ANNOTATION: &str = "type_predicate_annotation";
pub const TYPE_ARGUMENTS: &str = "type_arguments";

// Types
pub const TYPE_IDENTIFIER: &str = "type_identifier";
pub const NESTED_TYPE_IDENTIFIER: &str = "nested_type_identifier";
pub const PREDEFINED_TYPE: &str = "predefined_type";
pub const GENERIC_TYPE: &str = "generic_type";
pub const UNION_TYPE: &str = "union_type";
pub const INTERSECTION_TYPE: &str = "intersection_type";
pub const TUPLE_TYPE: &str = "tuple_type";
pub const ARRAY_TYPE: &str = "array_type";
pub const OBJECT_TYPE: &str = "object_type";
pub const TYPE_QUERY: &str = "type_query";
pub const THIS_TYPE: &str = "this_type";
pub const LITERAL_TYPE: &str = "literal_type";
pub const PARENTHESIZED_TYPE: &str = "parenthesized_type";
pub const READONLY_TYPE: &str = "readonly_type";
pub const OPTIONAL_TYPE: &str = "optional_type";
pub const REST_TYPE: &str = "rest_type";

// Identifiers and expressions
pub const IDENTIFIER: &str = "identifier";
pub const PROPERTY_IDENTIFIER: &str = "property_identifier";
pub const PRIVATE_PROPERTY_IDENTIFIER: &str = "private_property_identifier";
pub const MEMBER_EXPRESSION: &str = "member_expression";
pub const NESTED_IDENTIFIER: &str = "nested_identifier";
pub const THIS: &str = "this";
pub const NULL: &str = "null";
pub const UNDEFINED: &str = "undefined";

// Modifiers and tokens
pub const ACCESSIBILITY_MODIFIER: &str = "accessibility_modifier";
pub const STATIC: &str = "static";
pub const READONLY: &str = "readonly";
pub const GET: &str = "get";
pub const SET: &str = "set";
pub const OPTIONAL_MARK: &str = "?";

/// Method name that marks a constructor
pub const CONSTRUCTOR_NAME: &str = "constructor";

/// Declaration kinds that produce a node in the code model
pub fn is_type_declaration(kind: &str) -> bool {
    matches!(
        kind,
        CLASS_DECLARATION | ABSTRACT_CLASS_DECLARATION | INTERFACE_DECLARATION
    )
}

/// Nodes that carry a return type annotation
pub fn is_return_annotation(kind: &str) -> bool {
    matches!(
        kind,
        TYPE_ANNOTATION | ASSERTS_ANNOTATION | TYPE_PREDICATE_ANNOTATION
    )
}
