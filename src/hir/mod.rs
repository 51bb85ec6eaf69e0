//! Workflow semantic index.
//!
//! [`WorkflowIndex`] wraps one parsed [`YamlTree`](crate::syntax::YamlTree)
//! and answers workflow-shaped questions about it: which node the caret is
//! on, which jobs, steps, inputs, outputs, env vars and secrets are declared,
//! and which of them are visible from a given place in the document.
//!
//! Nothing here is cached or mutated. Every view is recomputed from the tree
//! on request.
//!
//! ## Key Types
//!
//! - [`WorkflowIndex`]: tree + document kind + caret offset
//! - [`DocumentKind`]: workflow, action definition, or other YAML
//! - [`Scope`]: the job/step a query is asked from
//! - [`ActionLookup`]: how the index learns about `uses:` actions

mod index;
mod kind;
mod outputs;
mod scope;

#[cfg(test)]
mod tests;

pub use index::WorkflowIndex;
pub use kind::DocumentKind;
pub use outputs::{ActionLookup, NoActions, script_outputs};
pub use scope::{Scope, description_of};
