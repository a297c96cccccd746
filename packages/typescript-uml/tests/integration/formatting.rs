//! Source → filtered model → diagram text

use pretty_assertions::assert_eq;
use typescript_uml::config::{ClassDiagramOptions, Formatter};
use typescript_uml::features::diagram_filter::filter_model;
use typescript_uml::shared::models::{Association, Generalization, Stereotype};
use typescript_uml::{generate_class_diagram, parse_source, CodeModel};

fn build(source: &str) -> CodeModel {
    parse_source(source, "diagram.ts", None).unwrap()
}

#[test]
fn test_heritage_round_trip() {
    let model = build("class Foo extends Bar implements IBar, IFoo {}");

    assert_eq!(
        model.node_names().collect::<Vec<_>>(),
        vec!["Foo", "Bar", "IBar", "IFoo"]
    );
    assert_eq!(model.node("Bar").unwrap().stereotype, Stereotype::None);
    assert_eq!(model.node("IBar").unwrap().stereotype, Stereotype::Interface);
    assert_eq!(model.node("IFoo").unwrap().stereotype, Stereotype::Interface);

    let yuml = generate_class_diagram(&model, &ClassDiagramOptions::default()).unwrap();
    assert_eq!(
        yuml,
        "// {type:class}\n[Bar]^[Foo]\n[<<IBar>>]^[Foo]\n[<<IFoo>>]^[Foo]\n"
    );
}

#[test]
fn test_placeholder_replaced_by_declaration() {
    let model = build("class Foo extends Bar {}\nclass Bar { name: string; }");

    assert_eq!(model.node_count(), 2);
    assert!(model.node("Bar").unwrap().variable("name").is_some());

    let yuml = generate_class_diagram(&model, &ClassDiagramOptions::default()).unwrap();
    assert_eq!(yuml, "// {type:class}\n[Bar|+name:string]^[Foo]\n");
}

#[test]
fn test_bidirectional_association_yuml() {
    let model =
        build("class Foo { bar: Bar; }\nclass Bar { foo: Foo; items: Item[]; }\nclass Item {}");

    let yuml = generate_class_diagram(&model, &ClassDiagramOptions::default()).unwrap();
    assert_eq!(
        yuml,
        "// {type:class}\n[Bar|+foo:Foo;+items:Item［］]-[Foo|+bar:Bar]\n[Bar|+foo:Foo;+items:Item［］]->[Item]\n"
    );
}

#[test]
fn test_accessor_pair_plantuml() {
    let model = build(
        "abstract class Base {\n  get value(): number { return 1; }\n  set value(v: number) {}\n  abstract run(times?: number): void;\n}",
    );
    let options = ClassDiagramOptions::default().with_formatter(Formatter::PlantUml);

    let plantuml = generate_class_diagram(&model, &options).unwrap();
    assert_eq!(
        plantuml,
        "@startuml\nabstract class Base{\n  +value : number\n  +run(times?: number): void\n}\n\n\n@enduml\n"
    );
}

#[test]
fn test_exclude_removes_touching_links() {
    let model = build(
        "class Foo extends Base { bar: Bar; baz: Baz; }\nclass Bar { baz: Baz; }\nclass Baz {}\nclass Base {}",
    );

    let filtered = filter_model(&model, None, Some(&["Bar"][..]));
    assert!(!filtered.contains_node("Bar"));
    assert!(filtered.contains_association(&Association::new("Foo", "Baz")));
    assert!(filtered.contains_generalization(&Generalization::new("Foo", "Base")));
    assert!(!filtered.contains_association(&Association::new("Foo", "Bar")));
    assert!(!filtered.contains_association(&Association::new("Bar", "Baz")));
    assert!(filtered.dangling_links().is_empty());
    // The source model is untouched
    assert!(model.contains_node("Bar"));
}

#[test]
fn test_include_single_node_drops_all_links() {
    let model = build("class Foo { bar: Bar; }\nclass Bar { foo: Foo; }");
    let options = ClassDiagramOptions::default().with_include(vec!["Bar".into()]);

    let yuml = generate_class_diagram(&model, &options).unwrap();
    assert_eq!(yuml, "// {type:class}\n[Bar|+foo:Foo]\n");
}

#[test]
fn test_json_output_reloads() {
    let model = build("interface IFoo { run(a: string): Promise<Bar>; }");
    let options = ClassDiagramOptions::default().with_formatter(Formatter::Json);

    let json = generate_class_diagram(&model, &options).unwrap();
    let reloaded: CodeModel = serde_json::from_str(&json).unwrap();
    assert_eq!(reloaded, model);
    assert!(reloaded.contains_association(&Association::new("IFoo", "Bar")));
}
