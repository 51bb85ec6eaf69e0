//! Expression path completion inside `${{ … }}`.

use std::sync::Arc;

use actionsense::hir::DocumentKind;
use actionsense::ide::{AnalysisHost, ResolutionState};

use crate::helpers::analysis_helpers::*;
use crate::helpers::source_fixtures::*;

const WORKFLOW_PATH: &str = "/repo/.github/workflows/ci.yml";

const CI: &str = r#"
on:
  push:
  workflow_call:
    outputs:
      sha:
        value: ${{ jobs.build.outputs.sha }}
env:
  CARGO_TERM_COLOR: always
jobs:
  build:
    runs-on: ubuntu-latest
    outputs:
      sha: ${{ steps.checkout.outputs.commit }}
    steps:
      - id: checkout
        uses: actions/checkout@v4
      - id: setup
        uses: ./.github/actions/setup
      - id: version
        run: |
          echo "version=$(cat VERSION)" >> $GITHUB_OUTPUT
          echo "::set-output name=channel::stable"
      - run: echo ${{ steps.version.outputs. }}
  release:
    needs: [build]
    runs-on: ubuntu-latest
    steps:
      - run: echo ${{ needs.build.outputs. }}
"#;

fn host() -> AnalysisHost {
    let fake = Arc::new(FakeHost::new().serve("actions/checkout/action.yml@v4", CHECKOUT_ACTION));
    let project = MemoryProject::default().with_file("./.github/actions/setup/action.yml", SETUP_ACTION);
    host_with(fake, project)
}

fn labels_at(host: &AnalysisHost, text: &str, marker: &str) -> Vec<String> {
    completion_labels(host, text, WORKFLOW_PATH, marker)
}

#[test]
fn test_step_ids_in_current_job() {
    let text = CI.replace("steps.version.outputs.", "steps.");
    let labels = labels_at(&host(), &text, "echo ${{ steps.");
    assert_eq!(labels, vec!["checkout", "setup", "version"]);
}

#[test]
fn test_outputs_written_by_run_script() {
    let labels = labels_at(&host(), CI, "steps.version.outputs.");
    assert_eq!(labels, vec!["version", "channel"]);
}

#[test]
fn test_outputs_of_remote_action_step() {
    let text = CI.replace("steps.version.outputs.", "steps.checkout.outputs.");
    let labels = labels_at(&host(), &text, "echo ${{ steps.checkout.outputs.");
    assert_eq!(labels, vec!["commit"]);
}

#[test]
fn test_outputs_of_local_action_step() {
    let text = CI.replace("steps.version.outputs.", "steps.setup.outputs.");
    let labels = labels_at(&host(), &text, "echo ${{ steps.setup.outputs.");
    assert_eq!(labels, vec!["cache-hit"]);
}

#[test]
fn test_needs_outputs() {
    let labels = labels_at(&host(), CI, "needs.build.outputs.");
    assert_eq!(labels, vec!["sha"]);
}

#[test]
fn test_misspelled_step_yields_nothing() {
    let host = host();
    let text = CI.replace("steps.version.outputs.", "steps.verison.outputs.");
    let caret = caret_after(&text, "steps.verison.outputs.");
    let analysis = host.analysis(&text, Some(std::path::Path::new(WORKFLOW_PATH)), caret);

    let result = analysis.expression();
    assert_eq!(result.state, ResolutionState::Abandoned);
    assert!(analysis.completions().is_empty());
}

#[test]
fn test_env_prefix_match() {
    let text = CI.replace("steps.version.outputs.", "env.ca");
    let labels = labels_at(&host(), &text, "env.ca");
    assert_eq!(labels, vec!["CARGO_TERM_COLOR"]);
}

#[test]
fn test_composite_action_document() {
    let host = host();
    let text = SETUP_ACTION.replace(
        "value: ${{ steps.cache.outputs.hit }}",
        "value: ${{ steps.cache.outputs. }}",
    );
    let path = "/repo/.github/actions/setup/action.yml";

    let caret = caret_after(&text, "steps.cache.outputs.");
    let analysis = host.analysis(&text, Some(std::path::Path::new(path)), caret);
    assert_eq!(analysis.kind(), DocumentKind::Action);
    let labels: Vec<_> = analysis
        .completions()
        .iter()
        .map(|item| item.label.to_string())
        .collect();
    assert_eq!(labels, vec!["hit"]);

    let text = SETUP_ACTION.replace("run: echo", "run: echo ${{ inputs. }} &&");
    assert_eq!(
        completion_labels(&host, &text, path, "${{ inputs."),
        vec!["toolchain"]
    );
}
