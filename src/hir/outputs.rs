//! Step outputs and `with:` inputs, which depend on the actions steps use.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use super::index::{WorkflowIndex, is_step};
use crate::base::constants::{FIELD_ID, FIELD_RUN, FIELD_STEPS, FIELD_USES, FIELD_WITH};
use crate::syntax::YamlNode;

/// `echo "name=value" >> $GITHUB_OUTPUT` (also `"${GITHUB_OUTPUT}"`).
static GITHUB_OUTPUT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"echo\s+["']?(?<name>[A-Za-z_][\w-]*)=(?<value>[^"'\n>]*)["']?\s*>>\s*["']?\$\{?GITHUB_OUTPUT\}?"#,
    )
    .expect("GITHUB_OUTPUT pattern is valid")
});

/// Legacy `::set-output name=<name>::<value>`.
static SET_OUTPUT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"::set-output\s+name=(?<name>[\w-]+)::(?<value>[^"'\n]*)"#)
        .expect("set-output pattern is valid")
});

/// Metadata about the actions named by `uses:` values.
///
/// The index does not fetch anything itself; callers plug in a resolver.
pub trait ActionLookup {
    /// Declared inputs of the action, name → description.
    fn inputs_of(&self, uses: &str) -> IndexMap<String, String>;

    /// Declared outputs of the action, name → description.
    fn outputs_of(&self, uses: &str) -> IndexMap<String, String>;
}

/// An [`ActionLookup`] that knows no actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoActions;

impl ActionLookup for NoActions {
    fn inputs_of(&self, _uses: &str) -> IndexMap<String, String> {
        IndexMap::new()
    }

    fn outputs_of(&self, _uses: &str) -> IndexMap<String, String> {
        IndexMap::new()
    }
}

/// Outputs a `run:` script writes, name → value.
pub fn script_outputs(script: &str) -> IndexMap<String, String> {
    let mut outputs = IndexMap::new();
    let patterns = [&*GITHUB_OUTPUT_PATTERN, &*SET_OUTPUT_PATTERN];
    for pattern in patterns {
        for captures in pattern.captures_iter(script) {
            let name = captures["name"].to_string();
            let value = captures["value"].trim().to_string();
            outputs.entry(name).or_insert(value);
        }
    }
    outputs
}

impl WorkflowIndex {
    /// Step with the given id in a job (or in `runs.steps` of an action).
    pub fn step(&self, job_id: Option<&str>, step_id: &str) -> Option<YamlNode<'_>> {
        self.steps_owner(job_id)?
            .child(FIELD_STEPS)?
            .children()
            .find(|step| step.child_value(FIELD_ID) == Some(step_id))
    }

    /// Outputs of a step: those declared by the action it uses, followed by
    /// those its `run:` script writes.
    pub fn step_outputs(
        &self,
        job_id: Option<&str>,
        step_id: &str,
        actions: &dyn ActionLookup,
    ) -> IndexMap<String, String> {
        let Some(step) = self.step(job_id, step_id) else {
            return IndexMap::new();
        };

        let mut outputs = step
            .child_value(FIELD_USES)
            .map(|uses| actions.outputs_of(uses))
            .unwrap_or_default();
        if let Some(script) = step.child_value(FIELD_RUN) {
            for (name, value) in script_outputs(script) {
                outputs.entry(name).or_insert(value);
            }
        }
        outputs
    }

    /// Inputs of the action used by the step whose `with:` block the caret is
    /// in.
    pub fn action_inputs(&self, actions: &dyn ActionLookup) -> Option<IndexMap<String, String>> {
        self.action_inputs_at(self.current_node()?, actions)
    }

    /// Inputs of the action used by the step whose `with:` block contains
    /// `node` (or is `node`), minus the inputs already written there.
    ///
    /// `None` when `node` is not in a `with:` block or the step has no
    /// `uses:`.
    pub fn action_inputs_at(
        &self,
        node: YamlNode<'_>,
        actions: &dyn ActionLookup,
    ) -> Option<IndexMap<String, String>> {
        let with = if node.has_name(FIELD_WITH) {
            node
        } else {
            node.parent().filter(|parent| parent.has_name(FIELD_WITH))?
        };
        let step = with.parent().filter(|step| is_step(step))?;
        let uses = step.child_value(FIELD_USES)?;

        // The key under the caret is still being typed; keep it offered.
        let typing = (node.id() != with.id()).then(|| node.id());
        let mut inputs = actions.inputs_of(uses);
        for written in with.children() {
            if Some(written.id()) == typing {
                continue;
            }
            if let Some(name) = written.name() {
                inputs.shift_remove(name);
            }
        }
        tracing::debug!(uses, count = inputs.len(), "action inputs");
        Some(inputs)
    }
}
