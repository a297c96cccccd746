//! tsuml - TypeScript to UML class diagram
//!
//! # Usage
//!
//! ```bash
//! # yUML for the project in the current directory
//! tsuml
//!
//! # PlantUML for one package, only two classes
//! tsuml packages/app --format plantuml --node Foo --node Bar
//!
//! # Options from a file, output to disk
//! tsuml --config tsuml.yaml --output diagram.puml
//! ```

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use typescript_uml::config::{
    ClassDiagramOptions, ClassDiagramOptionsPatch, NodeFilterPatch, OptionsFileV1, PlantUmlPatch,
};
use typescript_uml::{generate_class_diagram, parse_project, Formatter, ParseOptions, UmlError};

#[derive(Parser)]
#[command(name = "tsuml")]
#[command(about = "Generate UML class diagrams from a TypeScript project", long_about = None)]
struct Cli {
    /// Project root (tsconfig.json is searched from here upward)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Path to tsconfig.json or its directory
    #[arg(long)]
    tsconfig: Option<PathBuf>,

    /// File patterns replacing the tsconfig include list
    #[arg(long = "include")]
    include: Vec<String>,

    /// File patterns added to the tsconfig exclude list
    #[arg(long = "exclude")]
    exclude: Vec<String>,

    /// Only show these nodes
    #[arg(long = "node")]
    nodes: Vec<String>,

    /// Never show these nodes
    #[arg(long = "exclude-node")]
    exclude_nodes: Vec<String>,

    /// Diagram notation: yuml, plantuml or json
    #[arg(short, long)]
    format: Option<Formatter>,

    /// Omit @startuml / @enduml
    #[arg(long)]
    no_diagram_tags: bool,

    /// Options file (YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    /// Command-line flags as patches; they win over the options file
    fn patches(&self) -> (ClassDiagramOptionsPatch, ParseOptions) {
        let non_empty = |v: &Vec<String>| (!v.is_empty()).then(|| v.clone());

        let diagram = ClassDiagramOptionsPatch {
            formatter: self.format,
            nodes: Some(NodeFilterPatch {
                include: non_empty(&self.nodes),
                exclude: non_empty(&self.exclude_nodes),
            }),
            plantuml: self.no_diagram_tags.then_some(PlantUmlPatch {
                diagram_tags: Some(false),
            }),
        };
        let parse = ParseOptions {
            include: non_empty(&self.include),
            exclude: non_empty(&self.exclude),
            tsconfig: self.tsconfig.clone(),
        };
        (diagram, parse)
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Options file (if any) overlaid with the command-line flags
fn resolve_options(cli: &Cli) -> Result<(ClassDiagramOptions, ParseOptions), UmlError> {
    let (cli_diagram, cli_parse) = cli.patches();

    let (diagram_patch, parse_options) = match &cli.config {
        Some(path) => {
            let file = OptionsFileV1::load(path)?;
            debug!("Loaded options from {}", path.display());
            (
                file.diagram.unwrap_or_default().merge(cli_diagram),
                file.parse.unwrap_or_default().merge(cli_parse),
            )
        }
        None => (cli_diagram, cli_parse),
    };
    Ok((ClassDiagramOptions::from_patch(&diagram_patch), parse_options))
}

fn run(cli: &Cli) -> Result<(), UmlError> {
    let (diagram_options, parse_options) = resolve_options(cli)?;

    let model = parse_project(&cli.root, &parse_options)?;
    let diagram = generate_class_diagram(&model, &diagram_options)?;

    match &cli.output {
        Some(path) => fs::write(path, diagram).map_err(|e| UmlError::io(path, e))?,
        None => print!("{}", diagram),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("tsuml: {}", e);
            ExitCode::from(1)
        }
    }
}
