//! Path resolution inside `${{ … }}`.
//!
//! A path like `jobs.build.outputs.ver` is walked one depth at a time. Each
//! depth produces its candidate names; a depth is only computed when the
//! segment typed there is one of the previous depth's candidates, so a typo
//! early in the path yields no suggestions at all. The candidates of the last
//! depth, filtered by the partial word after the final dot, are the result.
//!
//! ```text
//! depth 0   root        steps | jobs | env | github | inputs | secrets | needs | other
//! depth 1   outputs     (jobs, needs, steps)
//! depth 2   names       job outputs (jobs, needs) or step outputs (steps)
//! ```

use tracing::trace;

use super::analysis::Analysis;
use super::completion::{CompletionItem, CompletionKind, filter_by_prefix, items_of, items_of_map};
use super::defaults::{DEFAULT_ROOTS, GITHUB_FIELDS, root_description};
use crate::base::constants::{
    FIELD_ENVS, FIELD_GITHUB, FIELD_INPUTS, FIELD_JOBS, FIELD_NEEDS, FIELD_OS, FIELD_OUTPUTS,
    FIELD_RUNS_ON, FIELD_SECRETS, FIELD_STEPS,
};
use crate::parser::BracketExpression;

/// The first segment of an expression path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Root {
    Steps,
    Jobs,
    Env,
    Github,
    Inputs,
    Secrets,
    Needs,
    /// Any other root, or none typed yet.
    Other,
}

impl Root {
    pub fn from_segment(segment: &str) -> Self {
        match segment {
            FIELD_STEPS => Root::Steps,
            FIELD_JOBS => Root::Jobs,
            FIELD_ENVS => Root::Env,
            FIELD_GITHUB => Root::Github,
            FIELD_INPUTS => Root::Inputs,
            FIELD_SECRETS => Root::Secrets,
            FIELD_NEEDS => Root::Needs,
            _ => Root::Other,
        }
    }

    /// Roots whose second segment names something with `outputs`.
    fn has_outputs(self) -> bool {
        matches!(self, Root::Jobs | Root::Needs | Root::Steps)
    }
}

/// Where path resolution ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionState {
    /// The caret is not inside an open `${{`.
    NotInBracket,
    /// A typed segment is not a candidate of the depth before it.
    Abandoned,
    /// Suggestions come from this depth.
    Resolved { depth: usize },
}

/// Result of resolving one expression path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCompletion {
    pub state: ResolutionState,
    pub items: Vec<CompletionItem>,
}

impl PathCompletion {
    fn empty(state: ResolutionState) -> Self {
        Self {
            state,
            items: Vec::new(),
        }
    }
}

/// Resolve the expression under the analysis caret, if there is one.
pub fn resolve_at_caret(analysis: &Analysis<'_>) -> PathCompletion {
    match BracketExpression::at_caret(analysis.text(), analysis.caret_offset()) {
        Some(expr) => resolve_path(analysis, &expr),
        None => PathCompletion::empty(ResolutionState::NotInBracket),
    }
}

/// Walk `expr`'s segments and return the candidates of the last depth.
pub fn resolve_path(analysis: &Analysis<'_>, expr: &BracketExpression) -> PathCompletion {
    let segments: Vec<&str> = expr.segments().iter().map(|s| s.as_str()).collect();
    let root = segments
        .first()
        .map_or(Root::Other, |segment| Root::from_segment(segment));

    let mut candidates = Vec::new();
    for depth in 0..segments.len().max(1) {
        if depth > 0 {
            let typed = segments[depth];
            if !candidates
                .iter()
                .any(|item: &CompletionItem| &*item.label == typed)
            {
                trace!(depth, typed, "expression path abandoned");
                return PathCompletion::empty(ResolutionState::Abandoned);
            }
        }
        candidates = candidates_at(analysis, root, depth, &segments);
        trace!(depth, ?root, count = candidates.len(), "expression candidates");
    }

    let depth = segments.len().saturating_sub(1);
    PathCompletion {
        state: ResolutionState::Resolved { depth },
        items: filter_by_prefix(candidates, expr.prefix()),
    }
}

/// Candidate names at `depth` of a path starting at `root`.
fn candidates_at(
    analysis: &Analysis<'_>,
    root: Root,
    depth: usize,
    segments: &[&str],
) -> Vec<CompletionItem> {
    match depth {
        0 => root_candidates(analysis, root),
        1 if root.has_outputs() => vec![CompletionItem::new(FIELD_OUTPUTS, CompletionKind::Output)],
        2 => {
            let Some(owner) = segments.get(1).copied() else {
                return Vec::new();
            };
            match root {
                Root::Jobs | Root::Needs => {
                    items_of_map(&analysis.full().job_outputs(owner), CompletionKind::Output)
                }
                Root::Steps => {
                    let scope = analysis.partial().current_scope();
                    let outputs =
                        analysis
                            .full()
                            .step_outputs(scope.job(), owner, analysis.actions());
                    items_of_map(&outputs, CompletionKind::Output)
                }
                _ => Vec::new(),
            }
        }
        _ => Vec::new(),
    }
}

fn root_candidates(analysis: &Analysis<'_>, root: Root) -> Vec<CompletionItem> {
    let partial = analysis.partial();
    let full = analysis.full();
    let scope = partial.current_scope();

    match root {
        Root::Steps => items_of_map(&full.steps_of(scope.job()), CompletionKind::Step),
        Root::Jobs => items_of_map(&full.jobs(), CompletionKind::Job),
        Root::Env => items_of_map(&full.envs(&scope), CompletionKind::Env),
        Root::Github => items_of(GITHUB_FIELDS.iter().copied(), CompletionKind::Env),
        Root::Inputs => items_of_map(&full.inputs(), CompletionKind::Input),
        Root::Secrets => items_of_map(&full.secrets(), CompletionKind::Secret),
        Root::Needs => {
            let Some(job) = scope.job() else {
                return Vec::new();
            };
            let jobs = full.jobs();
            let needs = full.needs_of(job);
            items_of(
                needs.iter().map(|need| {
                    let name = jobs.get(need).map(String::as_str).unwrap_or_default();
                    (need.as_str(), name)
                }),
                CompletionKind::Needs,
            )
        }
        Root::Other => {
            if partial.is_output_trigger_node() {
                return vec![
                    CompletionItem::new(FIELD_JOBS, CompletionKind::Job)
                        .with_detail(root_description(FIELD_JOBS)),
                ];
            }
            let current = partial.current_name();
            if current == Some(FIELD_RUNS_ON) || current == Some(FIELD_OS) {
                return Vec::new();
            }
            items_of(DEFAULT_ROOTS.iter().copied(), CompletionKind::Node)
        }
    }
}
