//! Source fixtures → Code Model

use pretty_assertions::assert_eq;
use typescript_uml::parse_source;
use typescript_uml::shared::models::{
    Accessibility, Association, CodeModel, Generalization, PrimaryTypeKind, Stereotype, Type,
    UnionOrIntersectionKind,
};

fn build(source: &str) -> CodeModel {
    parse_source(source, "fixture.ts", None).unwrap()
}

fn associations(model: &CodeModel) -> Vec<(String, String)> {
    model
        .associations()
        .map(|a| (a.from.clone(), a.to.clone()))
        .collect()
}

#[test]
fn test_member_variable_types() {
    let model = build(include_str!("../fixtures/typescript/member_variables.ts"));
    let foo = model.node("Foo").unwrap();

    let kind = |name: &str| foo.variable(name).unwrap().ty.primary_kind();
    assert_eq!(kind("_implicitAny"), Some(PrimaryTypeKind::ImplicitAny));
    assert_eq!(kind("_predefined"), Some(PrimaryTypeKind::PredefinedType));
    assert_eq!(kind("_reference"), Some(PrimaryTypeKind::TypeReference));
    assert_eq!(kind("_generic"), Some(PrimaryTypeKind::TypeReference));
    assert_eq!(kind("_literal"), Some(PrimaryTypeKind::ObjectType));
    assert_eq!(kind("_array"), Some(PrimaryTypeKind::ArrayType));
    assert_eq!(kind("_tuple"), Some(PrimaryTypeKind::TupleType));
    assert_eq!(kind("_query"), Some(PrimaryTypeKind::TypeQuery));
    assert_eq!(kind("_self"), Some(PrimaryTypeKind::ThisType));

    let Type::UnionOrIntersection(union) = &foo.variable("_union").unwrap().ty else {
        panic!("expected union");
    };
    assert_eq!(union.kind, UnionOrIntersectionKind::Union);
    assert_eq!(union.types.len(), 3);

    let Type::UnionOrIntersection(intersection) = &foo.variable("_intersection").unwrap().ty
    else {
        panic!("expected intersection");
    };
    assert_eq!(intersection.kind, UnionOrIntersectionKind::Intersection);
    assert_eq!(intersection.types.len(), 2);

    let generic = foo.variable("_generic").unwrap().ty.as_primary().unwrap();
    assert_eq!(generic.name.as_deref(), Some("TBar"));
    assert_eq!(generic.text, "TBar<string, Bar>");
    assert_eq!(generic.type_arguments.len(), 2);
}

#[test]
fn test_member_variable_accessibility() {
    let model = build(include_str!("../fixtures/typescript/member_variables.ts"));
    let foo = model.node("Foo").unwrap();

    let access = |name: &str| foo.variable(name).unwrap().accessibility;
    assert_eq!(access("_predefined"), Accessibility::Private);
    assert_eq!(access("protectedVariable"), Accessibility::Protected);
    assert_eq!(access("publicVariable"), Accessibility::Public);
    assert_eq!(access("implicitPublicVariable"), Accessibility::Public);

    // Declaration order is kept
    let names: Vec<_> = foo.variables.keys().map(String::as_str).collect();
    assert_eq!(names.first(), Some(&"_implicitAny"));
    assert_eq!(names.last(), Some(&"implicitPublicVariable"));
    assert_eq!(names.len(), 14);
}

#[test]
fn test_member_variable_associations() {
    let model = build(include_str!("../fixtures/typescript/member_variables.ts"));

    assert_eq!(
        associations(&model),
        vec![
            ("Foo".to_string(), "Bar".to_string()),
            ("Foo".to_string(), "TBar".to_string()),
            ("Foo".to_string(), "Baz".to_string()),
        ]
    );
    // Only Foo is declared; referenced types stay link endpoints
    assert_eq!(model.node_names().collect::<Vec<_>>(), vec!["Foo"]);
}

#[test]
fn test_member_functions() {
    let model = build(include_str!("../fixtures/typescript/member_functions.ts"));
    let foo = model.node("Foo").unwrap();
    assert_eq!(foo.methods.len(), 10);

    assert_eq!(
        foo.method("_privateFunction").unwrap().accessibility,
        Accessibility::Private
    );
    assert_eq!(
        foo.method("protectedFunction").unwrap().accessibility,
        Accessibility::Protected
    );
    assert_eq!(
        foo.method("implicitPublicFunction").unwrap().accessibility,
        Accessibility::Public
    );

    assert!(foo.method("implicitReturnType").unwrap().return_type.is_none());
    assert_eq!(
        foo.method("stringReturnType").unwrap().return_type.as_ref().map(Type::text),
        Some("string")
    );

    let params = &foo.method("parameterized").unwrap().parameters;
    assert_eq!(params.len(), 3);
    assert!(params[2].ty.as_ref().unwrap().is_implicit_any());

    let params = &foo.method("withInitializer").unwrap().parameters;
    assert!(params[1].optional);
    assert_eq!(params[1].default_initializer.as_deref(), Some("\"default\""));

    let params = &foo.method("withOptional").unwrap().parameters;
    assert!(params[1].optional);
    assert!(params[1].default_initializer.is_none());
}

#[test]
fn test_method_signature_associations() {
    let model = build(include_str!("../fixtures/typescript/member_functions.ts"));

    // Return type Foo | number | string references the owner itself
    assert!(model.contains_association(&Association::new("Foo", "Foo")));
    // Parameter type
    assert!(model.contains_association(&Association::new("Foo", "Bar")));
    assert_eq!(model.association_count(), 2);
}

#[test]
fn test_heritage_and_placeholders() {
    let model = build(include_str!("../fixtures/typescript/heritage.ts"));

    assert_eq!(model.node("IShape").unwrap().stereotype, Stereotype::Interface);
    assert_eq!(model.node("Shape").unwrap().stereotype, Stereotype::Abstract);
    assert_eq!(model.node("Circle").unwrap().stereotype, Stereotype::None);

    // Undeclared supertypes become placeholders
    assert_eq!(model.node("ILabelled").unwrap().stereotype, Stereotype::Interface);
    assert_eq!(model.node("Base").unwrap().stereotype, Stereotype::None);
    assert!(!model.node("Base").unwrap().has_members());

    for (from, to) in [
        ("INamed", "IShape"),
        ("INamed", "ILabelled"),
        ("Shape", "IShape"),
        ("Circle", "Shape"),
        ("Circle", "INamed"),
        ("Widget", "Base"),
    ] {
        assert!(
            model.contains_generalization(&Generalization::new(from, to)),
            "missing {} -> {}",
            from,
            to
        );
    }
    assert_eq!(model.generalization_count(), 6);
    assert!(model.dangling_links().iter().all(|(_, to)| *to != "Base"));
}

#[test]
fn test_class_members_supplements() {
    let model = build(include_str!("../fixtures/typescript/heritage.ts"));
    let circle = model.node("Circle").unwrap();

    let radius = circle.variable("radius").unwrap();
    assert_eq!(radius.stereotype, Stereotype::GetSet);
    assert_eq!(circle.variable("diameter").unwrap().stereotype, Stereotype::Get);

    let private_field = circle.variable("#radius").unwrap();
    assert_eq!(private_field.accessibility, Accessibility::Private);

    assert!(circle.variable("count").unwrap().is_static);
    assert_eq!(circle.variable("name").unwrap().accessibility, Accessibility::Public);
    assert!(circle.method("constructor").is_none());

    let shape = model.node("Shape").unwrap();
    assert_eq!(
        shape.variable("origin").unwrap().accessibility,
        Accessibility::Protected
    );
    assert!(model.contains_association(&Association::new("Shape", "Point")));

    let point = model.node("Point").unwrap();
    assert!(point.variable("next").unwrap().optional);
    assert!(model.contains_association(&Association::new("Point", "Point")));
}

#[test]
fn test_generic_container_associations() {
    let model = build(include_str!("../fixtures/typescript/heritage.ts"));

    for to in ["Map", "Circle", "ReadonlyArray", "Shape"] {
        assert!(model.contains_association(&Association::new("Registry", to)));
    }
    assert!(model.contains_association(&Association::new("Widget", "Circle")));
}

#[test]
fn test_redeclaration_replaces_members() {
    let model = parse_source("class Foo { a: string; }", "a.ts", None).unwrap();
    let model = parse_source("interface Foo { b: number; }", "b.ts", Some(model)).unwrap();

    let foo = model.node("Foo").unwrap();
    assert_eq!(foo.stereotype, Stereotype::Interface);
    assert!(foo.variable("a").is_none());
    assert!(foo.variable("b").is_some());
}

#[test]
fn test_syntax_errors_do_not_abort() {
    let model = build("class Good { x: Bar; }\nclass AlsoGood {}\nlet = ;");

    assert!(model.contains_node("Good"));
    assert!(model.contains_node("AlsoGood"));
    assert!(model.contains_association(&Association::new("Good", "Bar")));
}

#[test]
fn test_syntax_error_in_function_body() {
    let model = build("class Good {}\nfunction broken() { let = ; }\nclass AlsoGood { y: Baz; }");

    assert!(model.contains_node("Good"));
    assert!(model.contains_node("AlsoGood"));
    assert!(model.contains_association(&Association::new("AlsoGood", "Baz")));
}

#[test]
fn test_malformed_member_is_skipped() {
    let model = build("class Foo { x: Bar; = ; }");

    let foo = model.node("Foo").unwrap();
    assert_eq!(foo.variables.keys().collect::<Vec<_>>(), vec!["x"]);
    assert!(foo.methods.is_empty());
    assert_eq!(associations(&model), vec![("Foo".to_string(), "Bar".to_string())]);
}

#[test]
fn test_deeply_nested_declarations() {
    let depth = 500;
    let source = format!(
        "{}class Deep {{ x: Bar; }}{}",
        "namespace n { ".repeat(depth),
        " }".repeat(depth)
    );
    let model = build(&source);
    assert!(model.contains_node("Deep"));
}
