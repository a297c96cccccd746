//! PlantUML Formatter
//!
//! Declared nodes become `class` / `abstract class` / `interface` blocks;
//! links follow after a blank line. Undeclared endpoints are left to
//! PlantUML, which draws them as bare classes.

use crate::errors::Result;
use crate::features::formatting::ports::DiagramFormatter;
use crate::shared::models::{
    CodeModel, FunctionProperty, Node, Parameter, Stereotype, VariableProperty,
};

#[derive(Debug, Clone, Copy)]
pub struct PlantUmlFormatter {
    diagram_tags: bool,
}

impl Default for PlantUmlFormatter {
    fn default() -> Self {
        Self { diagram_tags: true }
    }
}

impl PlantUmlFormatter {
    pub fn new(diagram_tags: bool) -> Self {
        Self { diagram_tags }
    }

    fn format_node(&self, node: &Node) -> String {
        let keyword = match node.stereotype {
            Stereotype::Interface => "interface",
            Stereotype::Abstract => "abstract class",
            _ => "class",
        };

        let properties = node
            .variables
            .values()
            .map(|v| self.format_variable(v))
            .chain(node.methods.values().map(|m| self.format_method(m)))
            .collect::<Vec<_>>()
            .join("\n");

        format!("{} {}{{\n{}\n}}\n", keyword, node.name, properties)
    }

    fn format_variable(&self, variable: &VariableProperty) -> String {
        format!(
            "  {}{} : {}",
            variable.accessibility.symbol(),
            variable.name,
            variable.ty.text()
        )
    }

    fn format_method(&self, method: &FunctionProperty) -> String {
        let parameters = method
            .parameters
            .iter()
            .map(|p| self.format_parameter(p))
            .collect::<Vec<_>>()
            .join(", ");

        let return_type = method
            .return_type
            .as_ref()
            .map(|ty| format!(": {}", ty.text()))
            .unwrap_or_default();

        format!(
            "  {}{}({}){}",
            method.accessibility.symbol(),
            method.name,
            parameters,
            return_type
        )
    }

    fn format_parameter(&self, parameter: &Parameter) -> String {
        let mut out = parameter.name.clone();
        if parameter.optional && parameter.default_initializer.is_none() {
            out.push('?');
        }
        if let Some(ty) = &parameter.ty {
            out.push_str(": ");
            out.push_str(ty.text());
        }
        if let Some(initializer) = &parameter.default_initializer {
            out.push_str(" = ");
            out.push_str(initializer);
        }
        out
    }

    fn format_links(&self, model: &CodeModel) -> Vec<String> {
        let mut links = Vec::new();

        for association in model.associations() {
            if model.is_bidirectional(association) {
                if association.from < association.to {
                    links.push(format!("{} -- {}", association.from, association.to));
                }
            } else {
                links.push(format!("{} --> {}", association.from, association.to));
            }
        }

        for generalization in model.generalizations() {
            links.push(format!("{} <|-- {}", generalization.to, generalization.from));
        }

        links
    }
}

impl DiagramFormatter for PlantUmlFormatter {
    fn generate_class_diagram(&self, model: &CodeModel) -> Result<String> {
        let nodes = model
            .nodes()
            .map(|n| self.format_node(n))
            .collect::<Vec<_>>()
            .join("\n");
        let links = self.format_links(model).join("\n");
        let content = format!("{}\n{}", nodes, links);

        if self.diagram_tags {
            Ok(format!("@startuml\n{}\n@enduml\n", content))
        } else {
            Ok(content)
        }
    }

    fn name(&self) -> &'static str {
        "plantuml"
    }
}
