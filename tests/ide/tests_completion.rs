//! Completion against resolved action metadata.
//!
//! The documents here are mid-edit, the way an editor sends them: the line
//! under the caret is often not valid YAML yet.

use std::sync::Arc;

use crate::helpers::analysis_helpers::*;
use crate::helpers::source_fixtures::*;

const WORKFLOW_PATH: &str = "/repo/.github/workflows/ci.yml";

fn checkout_host() -> (Arc<FakeHost>, actionsense::ide::AnalysisHost) {
    let fake = Arc::new(FakeHost::new().serve("actions/checkout/action.yml@v4", CHECKOUT_ACTION));
    let project = MemoryProject::default().with_file("./.github/actions/setup/action.yml", SETUP_ACTION);
    let host = host_with(fake.clone(), project);
    (fake, host)
}

// =============================================================================
// WITH BLOCKS
// =============================================================================

#[test]
fn test_with_inputs_of_remote_action_while_typing() {
    let (_, host) = checkout_host();
    let text = r#"
jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
        with:
          fetch-depth: 0
          t
  test:
    runs-on: ubuntu-latest
"#;
    let labels = completion_labels(&host, text, WORKFLOW_PATH, "          t");
    assert_eq!(labels, vec!["token"]);
}

#[test]
fn test_with_inputs_exclude_written_keys() {
    let (_, host) = checkout_host();
    let text = r#"
jobs:
  build:
    steps:
      - uses: actions/checkout@v4
        with:
          ref: main
          token: ${{ secrets.TOKEN }}
"#;
    let labels = completion_labels(&host, text, WORKFLOW_PATH, "with:");
    assert_eq!(labels, vec!["repository", "fetch-depth"]);
}

#[test]
fn test_with_inputs_of_local_composite_action() {
    let (fake, host) = checkout_host();
    let text = r#"
jobs:
  build:
    steps:
      - uses: ./.github/actions/setup
        with:
          to
"#;
    let labels = completion_labels(&host, text, WORKFLOW_PATH, "          to");
    assert_eq!(labels, vec!["toolchain"]);
    assert_eq!(fake.requests(), 0);
}

#[test]
fn test_unknown_action_offers_nothing() {
    let (fake, host) = checkout_host();
    let text = r#"
jobs:
  build:
    steps:
      - uses: someone/missing@v1
        with:
          x
"#;
    let labels = completion_labels(&host, text, WORKFLOW_PATH, "          x");
    assert!(labels.is_empty());
    assert_eq!(fake.requests(), 1);
}

#[test]
fn test_metadata_is_fetched_once_across_requests() {
    let (fake, host) = checkout_host();
    let text = r#"
jobs:
  build:
    steps:
      - uses: actions/checkout@v4
        with:
          re
"#;
    for _ in 0..3 {
        let labels = completion_labels(&host, text, WORKFLOW_PATH, "          re");
        assert_eq!(labels, vec!["repository", "ref"]);
    }
    assert_eq!(fake.requests(), 1);
    assert_eq!(host.resolver().cache().len(), 1);
}

// =============================================================================
// NEEDS
// =============================================================================

#[test]
fn test_needs_list_offers_other_jobs() {
    let (_, host) = checkout_host();
    let text = r#"
jobs:
  build:
    runs-on: ubuntu-latest
  lint:
    runs-on: ubuntu-latest
  deploy:
    needs:
      - "#;
    let labels = completion_labels(&host, text, WORKFLOW_PATH, "      - ");
    assert_eq!(labels, vec!["build", "lint"]);
}
