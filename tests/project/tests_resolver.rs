//! `uses:` resolution through the public API, alone and behind an
//! `AnalysisHost`.

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use actionsense::ide::AnalysisHost;
use actionsense::project::{ActionCache, ActionResolver, ManualClock};

use crate::helpers::analysis_helpers::*;
use crate::helpers::source_fixtures::*;

const WORKFLOW_PATH: &str = "/repo/.github/workflows/ci.yml";

const CI: &str = r#"
jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - id: checkout
        uses: actions/checkout@v4
      - run: echo ${{ steps.checkout.outputs. }}
"#;

fn fake() -> Arc<FakeHost> {
    Arc::new(
        FakeHost::new()
            .serve("actions/checkout/action.yml@v4", CHECKOUT_ACTION)
            .serve("octo/deploy/.github/workflows/deploy.yml@v1", DEPLOY_WORKFLOW),
    )
}

fn resolver_with_clock(fake: Arc<FakeHost>, clock: Arc<ManualClock>) -> ActionResolver {
    ActionResolver::new(Arc::new(ActionCache::new()), fake).with_clock(clock)
}

// =============================================================================
// RESOLVER
// =============================================================================

#[test]
fn test_remote_action_metadata() {
    let resolver = ActionResolver::new(Arc::new(ActionCache::new()), fake());
    let action = resolver.resolve("actions/checkout@v4");

    assert!(action.is_action);
    let inputs: Vec<_> = action.inputs.keys().map(String::as_str).collect();
    assert_eq!(inputs, vec!["repository", "ref", "token", "fetch-depth"]);
    assert_eq!(
        action.outputs.get("commit").map(String::as_str),
        Some("The commit SHA that was checked out")
    );
}

#[test]
fn test_reusable_workflow_metadata() {
    let resolver = ActionResolver::new(Arc::new(ActionCache::new()), fake());
    let workflow = resolver.resolve("octo/deploy/.github/workflows/deploy.yml@v1");

    assert!(!workflow.is_action);
    assert_eq!(workflow.inputs.keys().collect::<Vec<_>>(), vec!["environment"]);
    assert_eq!(workflow.outputs.keys().collect::<Vec<_>>(), vec!["url"]);
}

#[test]
fn test_local_action_read_from_project() {
    let fake = fake();
    let project = MemoryProject::default().with_file("./.github/actions/setup/action.yml", SETUP_ACTION);
    let host = host_with(fake.clone(), project);

    let action = host.resolver().resolve("./.github/actions/setup");
    assert!(action.is_local());
    assert_eq!(action.inputs.keys().collect::<Vec<_>>(), vec!["toolchain"]);
    assert_eq!(fake.requests(), 0);
}

#[test]
fn test_docker_reference_is_never_fetched() {
    let fake = fake();
    let resolver = ActionResolver::new(Arc::new(ActionCache::new()), fake.clone());
    let action = resolver.resolve("docker://alpine:3.19");

    assert!(action.inputs.is_empty());
    assert!(action.outputs.is_empty());
    assert_eq!(fake.requests(), 0);
}

#[test]
fn test_failed_fetch_is_retried_after_short_ttl() {
    let fake = fake();
    let clock = Arc::new(ManualClock::new(SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000)));
    let resolver = resolver_with_clock(fake.clone(), clock.clone());

    assert!(resolver.resolve("someone/missing@v1").inputs.is_empty());
    clock.advance(Duration::from_secs(9 * 60));
    resolver.resolve("someone/missing@v1");
    assert_eq!(fake.requests(), 1);

    clock.advance(Duration::from_secs(2 * 60));
    resolver.resolve("someone/missing@v1");
    assert_eq!(fake.requests(), 2);
}

// =============================================================================
// BEHIND AN ANALYSIS HOST
// =============================================================================

#[test]
fn test_step_outputs_resolved_through_host() {
    let fake = fake();
    let host = host_with(fake.clone(), MemoryProject::default());

    let labels = completion_labels(&host, CI, WORKFLOW_PATH, "steps.checkout.outputs.");
    assert_eq!(labels, vec!["commit"]);
    assert_eq!(fake.requests(), 1);
}

#[test]
fn test_cache_is_shared_across_requests() {
    let fake = fake();
    let clock = Arc::new(ManualClock::new(SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000)));
    let host = AnalysisHost::new(Arc::new(resolver_with_clock(fake.clone(), clock.clone())));
    let caret = caret_after(CI, "steps.checkout.outputs.");

    let first = host.analysis(CI, Some(Path::new(WORKFLOW_PATH)), caret);
    assert_eq!(first.completions().len(), 1);
    let second = host.analysis(CI, Some(Path::new(WORKFLOW_PATH)), caret);
    assert_eq!(second.completions().len(), 1);
    assert_eq!(fake.requests(), 1);
    assert_eq!(host.resolver().cache().len(), 1);

    clock.advance(Duration::from_secs(25 * 60 * 60));
    let third = host.analysis(CI, Some(Path::new(WORKFLOW_PATH)), caret);
    assert_eq!(third.completions().len(), 1);
    assert_eq!(fake.requests(), 2);
}
