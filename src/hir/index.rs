//! The per-document index and its caret queries.

use text_size::TextSize;

use super::kind::DocumentKind;
use super::scope::Scope;
use crate::base::constants::{
    FIELD_JOBS, FIELD_ON, FIELD_ON_BOOLEAN, FIELD_OUTPUTS, FIELD_RUNS, FIELD_STEPS,
    FIELD_WORKFLOW_CALL,
};
use crate::core::text_utils::caret_line_end;
use crate::syntax::{self, NodeShape, YamlNode, YamlTree};

/// A parsed document plus the caret offset it was parsed for.
///
/// The tree is `None` when the text did not decode; every query then answers
/// with "nothing".
#[derive(Debug, Clone)]
pub struct WorkflowIndex {
    tree: Option<YamlTree>,
    kind: DocumentKind,
    caret: TextSize,
}

impl WorkflowIndex {
    /// Index the whole text.
    pub fn parse(text: &str, kind: DocumentKind, caret: TextSize) -> Self {
        Self::from_tree(syntax::parse(text), kind, caret)
    }

    /// Index the text up to the end of the caret line, repairing a half-typed
    /// last line if needed.
    pub fn parse_partial(text: &str, kind: DocumentKind, caret: TextSize) -> Self {
        let end = caret_line_end(text, usize::from(caret));
        Self::from_tree(syntax::parse_partial(&text[..end]), kind, caret)
    }

    /// Wrap an already decoded tree. An unknown kind is inferred from the
    /// tree's top-level keys.
    pub fn from_tree(tree: Option<YamlTree>, kind: DocumentKind, caret: TextSize) -> Self {
        let kind = match (&tree, kind) {
            (Some(tree), DocumentKind::Other) => DocumentKind::from_tree(tree),
            (_, kind) => kind,
        };
        Self { tree, kind, caret }
    }

    pub fn tree(&self) -> Option<&YamlTree> {
        self.tree.as_ref()
    }

    pub fn is_parsed(&self) -> bool {
        self.tree.is_some()
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn caret(&self) -> TextSize {
        self.caret
    }

    pub fn root(&self) -> Option<YamlNode<'_>> {
        self.tree.as_ref().map(YamlTree::root)
    }

    pub fn node_at_offset(&self, offset: TextSize) -> Option<YamlNode<'_>> {
        self.tree.as_ref().map(|tree| tree.node_at_offset(offset))
    }

    /// The node the caret is on.
    pub fn current_node(&self) -> Option<YamlNode<'_>> {
        self.node_at_offset(self.caret)
    }

    /// Key of the current node, if it has one.
    pub fn current_name(&self) -> Option<&str> {
        self.current_node().and_then(|node| node.name())
    }

    // ------------------------------------------------------------------
    // Jobs and steps
    // ------------------------------------------------------------------

    /// The `jobs.<id>` node with the given id.
    pub fn job(&self, job_id: &str) -> Option<YamlNode<'_>> {
        self.root()?.child(FIELD_JOBS)?.child(job_id)
    }

    /// The node whose `steps` list a scope's steps come from: the job for
    /// workflows, `runs` for action definitions.
    pub(super) fn steps_owner(&self, job_id: Option<&str>) -> Option<YamlNode<'_>> {
        match (self.kind, job_id) {
            (DocumentKind::Action, _) => self.root()?.child(FIELD_RUNS),
            (_, Some(job_id)) => self.job(job_id),
            (_, None) => None,
        }
    }

    /// The enclosing `jobs.<id>` of the current node.
    pub fn current_job(&self) -> Option<YamlNode<'_>> {
        self.current_node()?.ancestors_with_self().find(is_job)
    }

    /// The enclosing `steps[i]` item of the current node.
    pub fn current_step(&self) -> Option<YamlNode<'_>> {
        self.current_node()?.ancestors_with_self().find(is_step)
    }

    /// Where the caret is, as a job id and step position.
    pub fn current_scope(&self) -> Scope {
        self.current_node()
            .map(Scope::of_node)
            .unwrap_or_default()
    }

    /// Whether the caret sits under `on.workflow_call.outputs`, where output
    /// values may only reference job outputs.
    pub fn is_output_trigger_node(&self) -> bool {
        self.current_node().is_some_and(|node| {
            node.ancestors_with_self().any(|outputs| {
                outputs.has_name(FIELD_OUTPUTS)
                    && outputs.parent().is_some_and(|call| {
                        call.has_name(FIELD_WORKFLOW_CALL)
                            && call.parent().is_some_and(is_trigger_root)
                    })
            })
        })
    }

    // ------------------------------------------------------------------
    // Matching across parse passes
    // ------------------------------------------------------------------

    /// Find the node in this index that stands for `node` from another parse
    /// of the same document.
    ///
    /// A node matches when it sits at the same key path and, for scalars with
    /// a value, compares equal (value prefixes included, so a half-typed value
    /// finds its finished form). A key without a value matches on its path
    /// alone, since its children may lie past the end of a partial parse.
    /// When `node` itself has no counterpart the nearest ancestor that does is
    /// returned.
    pub fn counterpart(&self, node: YamlNode<'_>) -> Option<YamlNode<'_>> {
        let tree = self.tree.as_ref()?;
        node.ancestors_with_self().find_map(|wanted| {
            let path = key_path(wanted);
            tree.nodes().find(|candidate| {
                key_path(*candidate) == path
                    && (wanted.shape() != NodeShape::Scalar
                        || wanted.value().is_none()
                        || *candidate == wanted)
            })
        })
    }
}

/// One step of a node's location: a mapping key or a sequence position.
#[derive(Debug, PartialEq, Eq)]
enum PathKey<'a> {
    Key(&'a str),
    Item(usize),
}

fn key_path(node: YamlNode<'_>) -> Vec<PathKey<'_>> {
    let mut path: Vec<_> = node
        .ancestors_with_self()
        .filter(|node| !node.is_root())
        .map(|node| match node.name() {
            Some(name) => PathKey::Key(name),
            None => PathKey::Item(node.index()),
        })
        .collect();
    path.reverse();
    path
}

/// `on` (or `on` read as the boolean `true`) directly under the root.
pub(super) fn is_trigger_root(node: YamlNode<'_>) -> bool {
    (node.has_name(FIELD_ON) || node.has_name(FIELD_ON_BOOLEAN))
        && node.parent().is_some_and(|root| root.is_root())
}

/// A `jobs.<id>` node.
pub(super) fn is_job(node: &YamlNode<'_>) -> bool {
    node.name().is_some()
        && node.parent().is_some_and(|jobs| {
            jobs.has_name(FIELD_JOBS) && jobs.parent().is_some_and(|root| root.is_root())
        })
}

/// An item of a job's (or an action's `runs`) `steps` list.
pub(super) fn is_step(node: &YamlNode<'_>) -> bool {
    node.name().is_none()
        && node.parent().is_some_and(|steps| {
            steps.has_name(FIELD_STEPS)
                && steps.parent().is_some_and(|owner| {
                    is_job(&owner)
                        || (owner.has_name(FIELD_RUNS)
                            && owner.parent().is_some_and(|root| root.is_root()))
                })
        })
}
