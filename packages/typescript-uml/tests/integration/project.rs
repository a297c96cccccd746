//! tsconfig project → Code Model

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use typescript_uml::config::OptionsFileV1;
use typescript_uml::shared::models::Generalization;
use typescript_uml::{parse_project, ParseOptions, UmlError};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// src/ (two files), test/, node_modules/, dist/ and a commented tsconfig
fn sample_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(
        root,
        "tsconfig.json",
        r#"{
  // build settings
  "compilerOptions": {
    "target": "es2017",
    "outDir": "dist", /* emitted JS */
  },
}"#,
    );
    write(root, "src/shape.ts", "export abstract class Shape { abstract area(): number; }");
    write(
        root,
        "src/circle.ts",
        "import { Shape } from './shape';\nexport class Circle extends Shape { area(): number { return 0; } }",
    );
    write(root, "test/circle.spec.ts", "class CircleSpec { subject: Circle; }");
    write(root, "node_modules/lib/index.d.ts", "export declare class Vendor {}");
    write(root, "dist/circle.d.ts", "export declare class Circle {}");
    temp
}

fn sorted_names(model: &typescript_uml::CodeModel) -> Vec<String> {
    let mut names: Vec<String> = model.node_names().map(String::from).collect();
    names.sort();
    names
}

#[test]
fn test_parse_project_with_defaults() {
    let project = sample_project();

    let model = parse_project(project.path(), &ParseOptions::default()).unwrap();
    assert_eq!(sorted_names(&model), vec!["Circle", "CircleSpec", "Shape"]);
    assert!(model.contains_generalization(&Generalization::new("Circle", "Shape")));
}

#[test]
fn test_parse_project_from_subdirectory() {
    let project = sample_project();

    // tsconfig.json is found by searching upward
    let model = parse_project(&project.path().join("src"), &ParseOptions::default()).unwrap();
    assert_eq!(model.node_count(), 3);
}

#[test]
fn test_parse_options_override_include_and_exclude() {
    let project = sample_project();

    let options = ParseOptions::default().with_include(vec!["src".into(), "test".into()]);
    let model = parse_project(project.path(), &options).unwrap();
    assert_eq!(sorted_names(&model), vec!["Circle", "CircleSpec", "Shape"]);

    let options = options.with_exclude(vec!["test".into()]);
    let model = parse_project(project.path(), &options).unwrap();
    assert_eq!(sorted_names(&model), vec!["Circle", "Shape"]);
}

#[test]
fn test_extends_and_explicit_tsconfig() {
    let project = sample_project();
    write(
        project.path(),
        "configs/tsconfig.base.json",
        r#"{ "include": ["../test"] }"#,
    );
    write(
        project.path(),
        "configs/tsconfig.test.json",
        r#"{ "extends": "./tsconfig.base" }"#,
    );

    let options =
        ParseOptions::default().with_tsconfig(project.path().join("configs/tsconfig.test.json"));
    let model = parse_project(project.path(), &options).unwrap();
    assert_eq!(sorted_names(&model), vec!["CircleSpec"]);
}

#[test]
fn test_missing_tsconfig() {
    let temp = TempDir::new().unwrap();
    let options = ParseOptions::default().with_tsconfig(temp.path().join("tsconfig.json"));

    let err = parse_project(temp.path(), &options).unwrap_err();
    assert!(matches!(err, UmlError::ConfigNotFound(_)));
}

#[test]
fn test_options_file_drives_parse() {
    let project = sample_project();
    write(
        project.path(),
        "tsuml.yaml",
        "version: 1\ndiagram:\n  formatter: plantuml\nparse:\n  include: [src]\n",
    );

    let file = OptionsFileV1::load(project.path().join("tsuml.yaml")).unwrap();
    let options = file.parse.unwrap_or_default();
    let model = parse_project(project.path(), &options).unwrap();
    assert_eq!(sorted_names(&model), vec!["Circle", "Shape"]);
}
