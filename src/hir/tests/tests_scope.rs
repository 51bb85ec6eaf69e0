#![allow(clippy::unwrap_used)]

use text_size::TextSize;

use super::super::*;

const WORKFLOW: &str = "\
name: release
on:
  workflow_call:
    inputs:
      version:
        description: Version to release
        type: string
    secrets:
      NPM_TOKEN:
        description: Registry token
    outputs:
      digest:
        description: Image digest
        value: ${{ jobs.publish.outputs.digest }}
  workflow_dispatch:
    inputs:
      dry-run:
        description: Skip publishing
env:
  GLOBAL: everywhere
jobs:
  build:
    name: Build it
    runs-on: ubuntu-latest
    env:
      BUILD_ONLY: yes
    outputs:
      artifact: ${{ steps.pack.outputs.file }}
    steps:
      - id: checkout
        uses: actions/checkout@v4
      - name: no id here
        run: make
      - id: pack
        env:
          STEP_ONLY: here
        run: echo packing
  publish:
    needs: build
    runs-on: ubuntu-latest
    outputs:
      digest:
        description: Pushed digest
        value: ${{ steps.push.outputs.digest }}
    steps:
      - id: push
        run: echo pushing
  notify:
    needs: [build, publish]
    runs-on: ubuntu-latest
    steps:
      - run: echo done
";

fn index_at(needle: &str) -> WorkflowIndex {
    let caret = TextSize::new((WORKFLOW.find(needle).unwrap() + needle.len()) as u32);
    WorkflowIndex::parse(WORKFLOW, DocumentKind::Workflow, caret)
}

fn keys(map: &indexmap::IndexMap<String, String>) -> Vec<&str> {
    map.keys().map(String::as_str).collect()
}

#[test]
fn test_collect_preserves_declaration_order() {
    let text = "vars:\n  zulu: 1\n  alpha: 2\n  mike: 3\n  bravo: 4\n";
    let index = WorkflowIndex::parse(text, DocumentKind::Other, TextSize::new(0));
    let vars = index.collect(
        "vars",
        |_| true,
        |node| node.name().map(str::to_string),
        |node| node.value().unwrap_or_default().to_string(),
    );
    assert_eq!(keys(&vars), vec!["zulu", "alpha", "mike", "bravo"]);
    assert_eq!(vars["mike"], "3");
}

#[test]
fn test_collect_first_occurrence_wins() {
    let text = "a:\n  env:\n    X: first\nb:\n  env:\n    X: second\n    Y: only\n";
    let index = WorkflowIndex::parse(text, DocumentKind::Other, TextSize::new(0));
    let vars = index.collect(
        "env",
        |_| true,
        |node| node.name().map(str::to_string),
        |node| node.value().unwrap_or_default().to_string(),
    );
    assert_eq!(keys(&vars), vec!["X", "Y"]);
    assert_eq!(vars["X"], "first");
}

#[test]
fn test_jobs_lists_ids_with_names() {
    let index = index_at("name: release");
    let jobs = index.jobs();
    assert_eq!(keys(&jobs), vec!["build", "publish", "notify"]);
    assert_eq!(jobs["build"], "Build it");
    assert_eq!(jobs["publish"], "");
}

#[test]
fn test_steps_of_lists_only_steps_with_ids() {
    let index = index_at("name: release");
    let steps = index.steps_of(Some("build"));
    assert_eq!(keys(&steps), vec!["checkout", "pack"]);
    assert_eq!(steps["checkout"], "actions/checkout@v4");
    assert_eq!(keys(&index.steps_of(Some("publish"))), vec!["push"]);
    assert!(index.steps_of(Some("missing")).is_empty());
    assert!(index.steps_of(None).is_empty());
}

#[test]
fn test_needs_of_scalar_and_list() {
    let index = index_at("name: release");
    assert_eq!(index.needs_of("publish"), vec!["build"]);
    assert_eq!(index.needs_of("notify"), vec!["build", "publish"]);
    assert!(index.needs_of("build").is_empty());
}

#[test]
fn test_inputs_from_all_triggers() {
    let index = index_at("name: release");
    let inputs = index.inputs();
    assert_eq!(keys(&inputs), vec!["version", "dry-run"]);
    assert_eq!(inputs["version"], "Version to release");
}

#[test]
fn test_secrets_include_implicit_token() {
    let index = index_at("name: release");
    let secrets = index.secrets();
    assert_eq!(keys(&secrets), vec!["NPM_TOKEN", "GITHUB_TOKEN"]);
    assert_eq!(secrets["NPM_TOKEN"], "Registry token");
}

#[test]
fn test_outputs_of_workflow_call_only() {
    let index = index_at("name: release");
    let outputs = index.outputs();
    assert_eq!(keys(&outputs), vec!["digest"]);
    assert_eq!(outputs["digest"], "Image digest");
}

#[test]
fn test_job_outputs() {
    let index = index_at("name: release");
    let build = index.job_outputs("build");
    assert_eq!(build["artifact"], "${{ steps.pack.outputs.file }}");
    let publish = index.job_outputs("publish");
    assert_eq!(publish["digest"], "Pushed digest");
    assert!(index.job_outputs("notify").is_empty());
}

#[test]
fn test_root_env_visible_in_every_job() {
    for needle in ["echo packing", "echo pushing", "echo done"] {
        let index = index_at(needle);
        let envs = index.envs(&index.current_scope());
        assert!(envs.contains_key("GLOBAL"), "GLOBAL missing at {needle}");
    }
}

#[test]
fn test_job_env_not_visible_in_other_jobs() {
    let inside = index_at("- id: checkout");
    assert!(inside.envs(&inside.current_scope()).contains_key("BUILD_ONLY"));

    let other = index_at("echo pushing");
    let envs = other.envs(&other.current_scope());
    assert!(!envs.contains_key("BUILD_ONLY"));
    assert!(!envs.contains_key("STEP_ONLY"));
}

#[test]
fn test_step_env_only_visible_in_its_step() {
    let in_step = index_at("echo packing");
    assert_eq!(
        keys(&in_step.envs(&in_step.current_scope())),
        vec!["GLOBAL", "BUILD_ONLY", "STEP_ONLY"]
    );

    let sibling = index_at("uses: actions/checkout@v4");
    assert!(!sibling.envs(&sibling.current_scope()).contains_key("STEP_ONLY"));
}

#[test]
fn test_action_document_declarations() {
    let action = "\
name: setup
inputs:
  node-version:
    description: Node version
outputs:
  cache-hit:
    description: Whether the cache was hit
runs:
  using: composite
  steps:
    - id: install
      run: echo \"path=/opt\" >> $GITHUB_OUTPUT
      shell: bash
";
    let index = WorkflowIndex::parse(action, DocumentKind::Action, TextSize::new(0));
    assert_eq!(keys(&index.inputs()), vec!["node-version"]);
    assert_eq!(keys(&index.outputs()), vec!["cache-hit"]);
    assert_eq!(keys(&index.steps_of(None)), vec!["install"]);
}

#[test]
fn test_description_of_falls_back_to_value() {
    let index = WorkflowIndex::parse(
        "a:\n  description: text\nb: plain\nc: {}\n",
        DocumentKind::Other,
        TextSize::new(0),
    );
    let root = index.root().unwrap();
    assert_eq!(description_of(root.child("a").unwrap()), "text");
    assert_eq!(description_of(root.child("b").unwrap()), "plain");
    assert_eq!(description_of(root.child("c").unwrap()), "");
}
