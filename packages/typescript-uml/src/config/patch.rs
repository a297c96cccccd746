//! Patch types
//!
//! All-optional mirrors of the option types. A patch is applied to a full
//! value and yields a new full value; neither input is mutated.

use super::options::{ClassDiagramOptions, Formatter};
use serde::{Deserialize, Serialize};

/// Patch type for NodeFilterOptions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeFilterPatch {
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
}

/// Patch type for PlantUmlOptions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlantUmlPatch {
    pub diagram_tags: Option<bool>,
}

/// Patch type for ClassDiagramOptions (all fields optional)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassDiagramOptionsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<Formatter>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<NodeFilterPatch>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plantuml: Option<PlantUmlPatch>,
}

impl ClassDiagramOptionsPatch {
    /// Combine two patches; fields set in `other` win
    pub fn merge(self, other: ClassDiagramOptionsPatch) -> Self {
        let nodes = match (self.nodes, other.nodes) {
            (Some(base), Some(over)) => Some(NodeFilterPatch {
                include: over.include.or(base.include),
                exclude: over.exclude.or(base.exclude),
            }),
            (base, over) => over.or(base),
        };
        let plantuml = match (self.plantuml, other.plantuml) {
            (Some(base), Some(over)) => Some(PlantUmlPatch {
                diagram_tags: over.diagram_tags.or(base.diagram_tags),
            }),
            (base, over) => over.or(base),
        };

        Self {
            formatter: other.formatter.or(self.formatter),
            nodes,
            plantuml,
        }
    }
}

impl ClassDiagramOptions {
    /// Apply a patch, producing a new fully-populated value
    pub fn apply(self, patch: &ClassDiagramOptionsPatch) -> Self {
        let mut base = self;

        if let Some(v) = patch.formatter {
            base.formatter = v;
        }
        if let Some(nodes) = &patch.nodes {
            if let Some(v) = &nodes.include {
                base.nodes.include = Some(v.clone());
            }
            if let Some(v) = &nodes.exclude {
                base.nodes.exclude = Some(v.clone());
            }
        }
        if let Some(plantuml) = &patch.plantuml {
            if let Some(v) = plantuml.diagram_tags {
                base.plantuml.diagram_tags = v;
            }
        }

        base
    }

    /// Defaults with `patch` applied
    pub fn from_patch(patch: &ClassDiagramOptionsPatch) -> Self {
        Self::default().apply(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_patch_yields_defaults() {
        let options = ClassDiagramOptions::from_patch(&ClassDiagramOptionsPatch::default());
        assert_eq!(options, ClassDiagramOptions::default());
    }

    #[test]
    fn test_partial_patch_keeps_other_defaults() {
        let patch = ClassDiagramOptionsPatch {
            plantuml: Some(PlantUmlPatch {
                diagram_tags: Some(false),
            }),
            ..Default::default()
        };
        let options = ClassDiagramOptions::from_patch(&patch);

        assert!(!options.plantuml.diagram_tags);
        assert_eq!(options.formatter, Formatter::Yuml);
        assert_eq!(options.nodes.include, None);
    }

    #[test]
    fn test_apply_does_not_touch_patch() {
        let patch = ClassDiagramOptionsPatch {
            formatter: Some(Formatter::PlantUml),
            nodes: Some(NodeFilterPatch {
                include: None,
                exclude: Some(vec!["Foo".into()]),
            }),
            plantuml: None,
        };
        let snapshot = patch.clone();
        let options = ClassDiagramOptions::default().apply(&patch);

        assert_eq!(patch, snapshot);
        assert_eq!(options.formatter, Formatter::PlantUml);
        assert_eq!(options.nodes.exclude, Some(vec!["Foo".to_string()]));
    }

    #[test]
    fn test_merge_prefers_later_patch() {
        let file = ClassDiagramOptionsPatch {
            formatter: Some(Formatter::PlantUml),
            nodes: Some(NodeFilterPatch {
                include: Some(vec!["A".into()]),
                exclude: Some(vec!["B".into()]),
            }),
            plantuml: None,
        };
        let cli = ClassDiagramOptionsPatch {
            formatter: None,
            nodes: Some(NodeFilterPatch {
                include: None,
                exclude: Some(vec!["C".into()]),
            }),
            plantuml: Some(PlantUmlPatch {
                diagram_tags: Some(false),
            }),
        };

        let merged = file.merge(cli);
        assert_eq!(merged.formatter, Some(Formatter::PlantUml));
        let nodes = merged.nodes.unwrap();
        assert_eq!(nodes.include, Some(vec!["A".to_string()]));
        assert_eq!(nodes.exclude, Some(vec!["C".to_string()]));
        assert_eq!(merged.plantuml.unwrap().diagram_tags, Some(false));
    }
}
