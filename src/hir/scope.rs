//! Declaration views and their visibility rules.
//!
//! Everything here is built from [`WorkflowIndex::collect`]: find every
//! mapping with a given key, keep the children the scope filter accepts, and
//! map them to `name → value` pairs in document order.

use indexmap::IndexMap;

use super::index::{WorkflowIndex, is_job, is_step, is_trigger_root};
use super::kind::DocumentKind;
use crate::base::constants::{
    FIELD_DESCRIPTION, FIELD_ENVS, FIELD_ID, FIELD_INPUTS, FIELD_JOBS, FIELD_NAME, FIELD_NEEDS,
    FIELD_OUTPUTS, FIELD_SECRETS, FIELD_STEPS, FIELD_USES, FIELD_WORKFLOW_CALL, IMPLICIT_SECRET,
};
use crate::syntax::{NodeShape, YamlNode};

/// Description shown for the implicit `GITHUB_TOKEN` secret.
const IMPLICIT_SECRET_DESCRIPTION: &str = "Automatically created token for this workflow run";

/// The place a query is asked from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    /// Id of the enclosing job.
    pub job: Option<String>,
    /// Position of the enclosing step in its `steps` list.
    pub step: Option<usize>,
}

impl Scope {
    pub fn of_node(node: YamlNode<'_>) -> Self {
        let job = node
            .ancestors_with_self()
            .find(is_job)
            .and_then(|job| job.name())
            .map(str::to_string);
        let step = node
            .ancestors_with_self()
            .find(is_step)
            .map(|step| step.index());
        Self { job, step }
    }

    pub fn job(&self) -> Option<&str> {
        self.job.as_deref()
    }

    /// Whether a declaration owned by `owner` is visible from here.
    ///
    /// The root is visible everywhere, a job only from inside itself, and a
    /// step only from inside itself.
    fn sees(&self, owner: YamlNode<'_>) -> bool {
        if owner.is_root() {
            return true;
        }
        if is_job(&owner) {
            return owner.name() == self.job();
        }
        if is_step(&owner) {
            let job = owner.ancestors().find(is_job).and_then(|job| job.name());
            return job == self.job() && Some(owner.index()) == self.step;
        }
        false
    }
}

/// Description of a declaration: its `description` child, or its own scalar
/// value, or nothing.
pub fn description_of(node: YamlNode<'_>) -> String {
    node.child_value(FIELD_DESCRIPTION)
        .or_else(|| node.value())
        .unwrap_or_default()
        .to_string()
}

impl WorkflowIndex {
    /// Gather `key → value` pairs from the children of every mapping named
    /// `field`.
    ///
    /// `filter` is asked per child; `key_fn` may reject a child by returning
    /// `None`. When a key occurs more than once the first occurrence wins.
    pub fn collect<F, K, V>(
        &self,
        field: &str,
        mut filter: F,
        key_fn: K,
        value_fn: V,
    ) -> IndexMap<String, String>
    where
        F: FnMut(YamlNode<'_>) -> bool,
        K: Fn(YamlNode<'_>) -> Option<String>,
        V: Fn(YamlNode<'_>) -> String,
    {
        let mut map = IndexMap::new();
        let Some(root) = self.root() else {
            return map;
        };
        for container in root.collect_where(|node| node.has_name(field)) {
            for child in container.children() {
                if !filter(child) {
                    continue;
                }
                if let Some(key) = key_fn(child) {
                    map.entry(key).or_insert_with(|| value_fn(child));
                }
            }
        }
        map
    }

    /// Job ids, mapped to the job's display `name`.
    pub fn jobs(&self) -> IndexMap<String, String> {
        self.collect(FIELD_JOBS, |job| is_job(&job), name_of, |job| {
            job.child_value(FIELD_NAME).unwrap_or_default().to_string()
        })
    }

    /// Ids of the steps of `job_id` that declare one, mapped to what the step
    /// runs. Action definitions ignore the job and use `runs.steps`.
    pub fn steps_of(&self, job_id: Option<&str>) -> IndexMap<String, String> {
        let Some(owner) = self.steps_owner(job_id) else {
            return IndexMap::new();
        };
        self.collect(
            FIELD_STEPS,
            |step| {
                is_step(&step)
                    && step.parent().and_then(|steps| steps.parent()).map(|n| n.id())
                        == Some(owner.id())
            },
            |step| step.child_value(FIELD_ID).map(str::to_string),
            |step| {
                step.child_value(FIELD_NAME)
                    .or_else(|| step.child_value(FIELD_USES))
                    .unwrap_or_default()
                    .to_string()
            },
        )
    }

    /// Job ids listed in `jobs.<job_id>.needs`, as a scalar or a list.
    pub fn needs_of(&self, job_id: &str) -> Vec<String> {
        let Some(needs) = self.job(job_id).and_then(|job| job.child(FIELD_NEEDS)) else {
            return Vec::new();
        };
        match needs.shape() {
            NodeShape::Scalar => needs.value().map(str::to_string).into_iter().collect(),
            _ => needs
                .children()
                .filter_map(|item| item.value())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Declared inputs with their descriptions.
    ///
    /// Workflows declare them per trigger (`on.workflow_call.inputs`,
    /// `on.workflow_dispatch.inputs`); actions at the top level.
    pub fn inputs(&self) -> IndexMap<String, String> {
        let kind = self.kind();
        self.collect(
            FIELD_INPUTS,
            |input| {
                let Some(inputs) = input.parent() else {
                    return false;
                };
                match kind {
                    DocumentKind::Action => is_top_level(inputs),
                    _ => inputs
                        .parent()
                        .and_then(|trigger| trigger.parent())
                        .is_some_and(is_trigger_root),
                }
            },
            name_of,
            description_of,
        )
    }

    /// Declared outputs: top-level for actions, `on.workflow_call.outputs`
    /// for workflows.
    pub fn outputs(&self) -> IndexMap<String, String> {
        let kind = self.kind();
        self.collect(
            FIELD_OUTPUTS,
            |output| {
                let Some(outputs) = output.parent() else {
                    return false;
                };
                match kind {
                    DocumentKind::Action => is_top_level(outputs),
                    _ => is_workflow_call_child(outputs),
                }
            },
            name_of,
            description_of,
        )
    }

    /// `on.workflow_call.secrets` plus the implicit `GITHUB_TOKEN`.
    pub fn secrets(&self) -> IndexMap<String, String> {
        let mut secrets = self.collect(
            FIELD_SECRETS,
            |secret| secret.parent().is_some_and(is_workflow_call_child),
            name_of,
            description_of,
        );
        secrets
            .entry(IMPLICIT_SECRET.to_string())
            .or_insert_with(|| IMPLICIT_SECRET_DESCRIPTION.to_string());
        secrets
    }

    /// Environment variables visible from `scope`, mapped to their values.
    pub fn envs(&self, scope: &Scope) -> IndexMap<String, String> {
        self.collect(
            FIELD_ENVS,
            |var| {
                var.parent()
                    .and_then(|env| env.parent())
                    .is_some_and(|owner| scope.sees(owner))
            },
            name_of,
            |var| var.value().unwrap_or_default().to_string(),
        )
    }

    /// `jobs.<job_id>.outputs`, mapped to their value expressions.
    pub fn job_outputs(&self, job_id: &str) -> IndexMap<String, String> {
        let Some(outputs) = self.job(job_id).and_then(|job| job.child(FIELD_OUTPUTS)) else {
            return IndexMap::new();
        };
        outputs
            .children()
            .filter_map(|output| {
                let name = output.name()?;
                Some((name.to_string(), description_of(output)))
            })
            .collect()
    }
}

fn name_of(node: YamlNode<'_>) -> Option<String> {
    node.name().map(str::to_string)
}

fn is_top_level(node: YamlNode<'_>) -> bool {
    node.parent().is_some_and(|root| root.is_root())
}

/// A child of `on.workflow_call`.
fn is_workflow_call_child(node: YamlNode<'_>) -> bool {
    node.parent().is_some_and(|call| {
        call.has_name(FIELD_WORKFLOW_CALL) && call.parent().is_some_and(is_trigger_root)
    })
}
