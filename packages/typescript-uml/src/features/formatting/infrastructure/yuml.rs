//! yUML Formatter
//!
//! Layout:
//! - `// {type:class}` header
//! - one line per generalization: `[Parent]^[Child]`
//! - one line per association: `[A]-[B]` for a reciprocal pair (once),
//!   `[A]->[B]` otherwise
//! - every node not printed yet, one per line

use std::collections::HashSet;

use crate::errors::Result;
use crate::features::formatting::ports::DiagramFormatter;
use crate::shared::models::{
    CodeModel, FunctionProperty, Node, Parameter, Stereotype, VariableProperty,
};

const HEADER: &str = "// {type:class}\n";

#[derive(Debug, Clone, Copy, Default)]
pub struct YumlFormatter;

impl YumlFormatter {
    pub fn new() -> Self {
        Self
    }

    /// `[Name|vars|methods]`; empty trailing compartments are dropped
    fn format_node(&self, model: &CodeModel, name: &str) -> String {
        let Some(node) = model.node(name) else {
            return format!("[{}]", name);
        };

        let title = match node.stereotype {
            Stereotype::Interface => format!("<<{}>>", node.name),
            Stereotype::Abstract => format!("<<abstract>>;{}", node.name),
            _ => node.name.clone(),
        };

        let (variables, methods) = self.format_compartments(node);
        let mut parts = vec![title];
        if !methods.is_empty() {
            parts.push(variables);
            parts.push(methods);
        } else if !variables.is_empty() {
            parts.push(variables);
        }

        format!("[{}]", parts.join("|"))
    }

    fn format_compartments(&self, node: &Node) -> (String, String) {
        let variables = node
            .variables
            .values()
            .map(|v| self.format_variable(v))
            .collect::<Vec<_>>()
            .join(";");
        let methods = node
            .methods
            .values()
            .map(|m| self.format_method(m))
            .collect::<Vec<_>>()
            .join(";");

        (
            replace_special_characters(&variables),
            replace_special_characters(&methods),
        )
    }

    fn format_variable(&self, variable: &VariableProperty) -> String {
        let stereotype = match variable.stereotype {
            Stereotype::Get => "<<readonly>>",
            Stereotype::Set => "<<writeonly>>",
            _ => "",
        };
        format!(
            "{}{}{}:{}",
            variable.accessibility.symbol(),
            stereotype,
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
            .join(",");
        let returns = method
            .return_type
            .as_ref()
            .map(|t| format!(":{}", t.text()))
            .unwrap_or_default();

        format!(
            "{}{}({}){}",
            method.accessibility.symbol(),
            method.name,
            parameters,
            returns
        )
    }

    fn format_parameter(&self, parameter: &Parameter) -> String {
        let ty = parameter
            .ty
            .as_ref()
            .map(|t| format!(":{}", t.text()))
            .unwrap_or_default();
        match &parameter.default_initializer {
            Some(initializer) => format!("{}{}={}", parameter.name, ty, initializer),
            None if parameter.optional => format!("{}?{}", parameter.name, ty),
            None => format!("{}{}", parameter.name, ty),
        }
    }
}

/// yUML reserves square brackets; swap in full-width ones
fn replace_special_characters(value: &str) -> String {
    value.replace('[', "［").replace(']', "］")
}

impl DiagramFormatter for YumlFormatter {
    fn generate_class_diagram(&self, model: &CodeModel) -> Result<String> {
        let mut yuml = String::from(HEADER);
        let mut outputted: HashSet<&str> = HashSet::new();

        for generalization in model.generalizations() {
            yuml.push_str(&self.format_node(model, &generalization.to));
            yuml.push('^');
            yuml.push_str(&self.format_node(model, &generalization.from));
            yuml.push('\n');
            outputted.insert(&generalization.from);
            outputted.insert(&generalization.to);
        }

        for association in model.associations() {
            let connector = if model.is_bidirectional(association) {
                // Reciprocal pair: print once, from the smaller endpoint
                if association.from > association.to {
                    continue;
                }
                "-"
            } else {
                "->"
            };

            yuml.push_str(&self.format_node(model, &association.from));
            yuml.push_str(connector);
            yuml.push_str(&self.format_node(model, &association.to));
            yuml.push('\n');
            outputted.insert(&association.from);
            outputted.insert(&association.to);
        }

        for node in model.nodes() {
            if !outputted.contains(node.name.as_str()) {
                yuml.push_str(&self.format_node(model, &node.name));
                yuml.push('\n');
            }
        }

        Ok(yuml)
    }

    fn name(&self) -> &'static str {
        "yuml"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{
        Accessibility, Association, Generalization, PrimaryType, PrimaryTypeKind,
    };
    use pretty_assertions::assert_eq;

    fn render(model: &CodeModel) -> String {
        YumlFormatter::new().generate_class_diagram(model).unwrap()
    }

    fn variable(name: &str, accessibility: Accessibility, text: &str) -> VariableProperty {
        VariableProperty::new(name, accessibility, PrimaryType::predefined(text).into())
    }

    #[test]
    fn test_empty_model() {
        assert_eq!(render(&CodeModel::new()), "// {type:class}\n");
    }

    #[test]
    fn test_unassociated_classes_and_interfaces() {
        let mut model = CodeModel::new();
        model.declare_node(Node::class("Foo"));
        model.declare_node(Node::interface("IBar"));
        model.declare_node(Node::new("Base", Stereotype::Abstract));

        assert_eq!(
            render(&model),
            "// {type:class}\n[Foo]\n[<<IBar>>]\n[<<abstract>>;Base]\n"
        );
    }

    #[test]
    fn test_inheritance_prints_nodes_once() {
        let mut model = CodeModel::new();
        model.declare_node(Node::class("Foo"));
        model.declare_node(Node::interface("IBar"));
        model.add_generalization(Generalization::new("Foo", "IBar"));

        assert_eq!(render(&model), "// {type:class}\n[<<IBar>>]^[Foo]\n");
    }

    #[test]
    fn test_member_variables() {
        let mut model = CodeModel::new();
        let foo = model.declare_node(Node::class("Foo"));
        foo.add_variable(variable("foo1", Accessibility::Public, "string"));
        foo.add_variable(variable("foo2", Accessibility::Protected, "number"));
        foo.add_variable(variable("foo3", Accessibility::Private, "boolean"));

        assert_eq!(
            render(&model),
            "// {type:class}\n[Foo|+foo1:string;#foo2:number;-foo3:boolean]\n"
        );
    }

    #[test]
    fn test_accessor_stereotypes() {
        let mut model = CodeModel::new();
        let foo = model.declare_node(Node::class("Foo"));
        foo.add_variable(
            variable("a", Accessibility::Public, "string").with_stereotype(Stereotype::Get),
        );
        foo.add_variable(
            variable("b", Accessibility::Public, "string").with_stereotype(Stereotype::Set),
        );
        foo.add_variable(
            variable("c", Accessibility::Public, "string").with_stereotype(Stereotype::GetSet),
        );

        assert_eq!(
            render(&model),
            "// {type:class}\n[Foo|+<<readonly>>a:string;+<<writeonly>>b:string;+c:string]\n"
        );
    }

    #[test]
    fn test_methods() {
        let mut model = CodeModel::new();
        let foo = model.declare_node(Node::class("Foo"));
        foo.add_method(
            FunctionProperty::new("run", Accessibility::Public)
                .with_parameters(vec![
                    Parameter::new("a", Some(PrimaryType::predefined("string").into())),
                    Parameter::new("b", Some(PrimaryType::predefined("number").into()))
                        .with_default("5"),
                    Parameter::new("c", Some(PrimaryType::predefined("boolean").into()))
                        .with_optional(true),
                ])
                .with_return_type(Some(PrimaryType::predefined("void").into())),
        );
        foo.add_method(FunctionProperty::new("stop", Accessibility::Private));

        assert_eq!(
            render(&model),
            "// {type:class}\n[Foo||+run(a:string,b:number=5,c?:boolean):void;-stop()]\n"
        );
    }

    #[test]
    fn test_special_characters() {
        let mut model = CodeModel::new();
        let foo = model.declare_node(Node::class("Foo"));
        foo.add_variable(VariableProperty::new(
            "foo1",
            Accessibility::Public,
            PrimaryType::new("string[]", PrimaryTypeKind::ArrayType).into(),
        ));

        assert_eq!(render(&model), "// {type:class}\n[Foo|+foo1:string［］]\n");
    }

    #[test]
    fn test_associations() {
        let mut model = CodeModel::new();
        for name in ["Bar", "Foo", "Baz"] {
            model.declare_node(Node::class(name));
        }
        model.add_association(Association::new("Foo", "Bar"));
        model.add_association(Association::new("Bar", "Foo"));
        model.add_association(Association::new("Foo", "Baz"));
        model.add_association(Association::new("Baz", "Baz"));

        assert_eq!(
            render(&model),
            "// {type:class}\n[Bar]-[Foo]\n[Foo]->[Baz]\n[Baz]->[Baz]\n"
        );
    }

    #[test]
    fn test_association_to_undeclared_type() {
        let mut model = CodeModel::new();
        model.declare_node(Node::class("Foo"));
        model.add_association(Association::new("Foo", "Map"));

        assert_eq!(render(&model), "// {type:class}\n[Foo]->[Map]\n");
    }
}
