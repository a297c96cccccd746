//! Parse TypeScript, then render a class diagram
//!
//! ```rust
//! use typescript_uml::api::{generate_class_diagram, parse_source};
//! use typescript_uml::config::ClassDiagramOptions;
//!
//! let model = parse_source("class Foo { bar: Bar; }\nclass Bar {}", "foo.ts", None).unwrap();
//! let yuml = generate_class_diagram(&model, &ClassDiagramOptions::default()).unwrap();
//! assert_eq!(yuml, "// {type:class}\n[Foo|+bar:Bar]->[Bar]\n");
//! ```

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::{ClassDiagramOptions, ParseOptions};
use crate::errors::{Result, UmlError};
use crate::features::diagram_filter::NodeFilter;
use crate::features::formatting::create_formatter;
use crate::features::model_builder::ModelBuilder;
use crate::features::parsing::{SourceParser, TypeScriptParser};
use crate::features::project::discover_project;
use crate::shared::models::CodeModel;

/// Build `source` into `model` (or a fresh model)
pub fn parse_source(source: &str, file_name: &str, model: Option<CodeModel>) -> Result<CodeModel> {
    let mut model = model.unwrap_or_default();
    parse_into(&TypeScriptParser::new(), source, file_name, &mut model)?;
    Ok(model)
}

/// Read and build one file into `model` (or a fresh model)
pub fn parse_file(path: &Path, model: Option<CodeModel>) -> Result<CodeModel> {
    let source = fs::read_to_string(path).map_err(|e| UmlError::io(path, e))?;
    parse_source(&source, &path.to_string_lossy(), model)
}

/// Build every source of the tsconfig project at `root` into one model
pub fn parse_project(root: &Path, options: &ParseOptions) -> Result<CodeModel> {
    let project = discover_project(root, options)?;
    let parser = TypeScriptParser::new();
    let mut model = CodeModel::new();

    for file in &project.files {
        let source = fs::read_to_string(file).map_err(|e| UmlError::io(file, e))?;
        parse_into(&parser, &source, &file.to_string_lossy(), &mut model)?;
    }

    info!(
        "Built {} nodes, {} associations, {} generalizations from {} files",
        model.node_count(),
        model.association_count(),
        model.generalization_count(),
        project.files.len()
    );
    Ok(model)
}

/// Filter by `options.nodes`, then render with `options.formatter`
pub fn generate_class_diagram(model: &CodeModel, options: &ClassDiagramOptions) -> Result<String> {
    let filter = NodeFilter::new(
        options.nodes.include.as_deref(),
        options.nodes.exclude.as_deref(),
    );
    let filtered = filter.apply(model);
    let formatter = create_formatter(options);

    debug!(
        "Rendering {} of {} nodes as {}",
        filtered.node_count(),
        model.node_count(),
        formatter.name()
    );
    formatter.generate_class_diagram(&filtered)
}

fn parse_into(
    parser: &impl SourceParser,
    source: &str,
    file_name: &str,
    model: &mut CodeModel,
) -> Result<()> {
    let unit = parser.parse(source, file_name)?;
    let stats = ModelBuilder::new(model).build(&unit);
    debug!(
        "{}: {} declarations, {} members",
        file_name, stats.declarations, stats.members
    );
    Ok(())
}
