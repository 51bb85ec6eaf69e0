//! Document classification.

use std::path::Path;

use crate::base::constants::{FIELD_JOBS, FIELD_RUNS};
use crate::syntax::YamlTree;

/// What a YAML document defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocumentKind {
    /// A workflow under `.github/workflows/`.
    Workflow,
    /// An action definition (`action.yml` / `action.yaml`).
    Action,
    /// Any other YAML file.
    #[default]
    Other,
}

impl DocumentKind {
    /// Classify a document by its path alone.
    pub fn from_path(path: &Path) -> Self {
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == "yml" || ext == "yaml");
        if !is_yaml {
            return DocumentKind::Other;
        }

        if path.file_stem().and_then(|stem| stem.to_str()) == Some("action") {
            return DocumentKind::Action;
        }

        let in_workflows = path
            .parent()
            .is_some_and(|dir| dir.ends_with(".github/workflows"));
        if in_workflows {
            DocumentKind::Workflow
        } else {
            DocumentKind::Other
        }
    }

    /// Classify by top-level keys: `jobs` means workflow, `runs` means action.
    pub fn from_tree(tree: &YamlTree) -> Self {
        let root = tree.root();
        if root.child(FIELD_JOBS).is_some() {
            DocumentKind::Workflow
        } else if root.child(FIELD_RUNS).is_some() {
            DocumentKind::Action
        } else {
            DocumentKind::Other
        }
    }

    pub fn is_workflow(self) -> bool {
        self == DocumentKind::Workflow
    }

    pub fn is_action(self) -> bool {
        self == DocumentKind::Action
    }
}
