#![allow(clippy::unwrap_used)]

use rstest::rstest;

use super::super::*;

fn remote(owner: &str, repo: &str, path: &str, git_ref: &str) -> ActionRef {
    ActionRef::Remote {
        owner: owner.to_string(),
        repo: repo.to_string(),
        path: path.to_string(),
        git_ref: git_ref.to_string(),
    }
}

#[rstest]
#[case("actions/checkout@v3", remote("actions", "checkout", "action.yml", "v3"))]
#[case(
    "actions/setup-node/.github/workflows/reuse.yml@main",
    remote("actions", "setup-node", ".github/workflows/reuse.yml", "main")
)]
#[case("org/repo/tools@v1", remote("org", "repo", "tools/action.yml", "v1"))]
#[case("org/repo/ci.yaml@v1", remote("org", "repo", "ci.yaml", "v1"))]
#[case(
    "octo/repo/a/b@feature/x",
    remote("octo", "repo", "a/b/action.yml", "feature/x")
)]
#[case(
    "./.github/actions/build",
    ActionRef::Local { path: "./.github/actions/build/action.yml".to_string() }
)]
#[case(
    "./.github/workflows/deploy.yml",
    ActionRef::Local { path: "./.github/workflows/deploy.yml".to_string() }
)]
#[case(
    "docker://alpine:3.18",
    ActionRef::Docker { image: "alpine:3.18".to_string() }
)]
#[case("checkout", ActionRef::Unresolved)]
#[case("actions/checkout", ActionRef::Unresolved)]
#[case("", ActionRef::Unresolved)]
fn test_parse_uses(#[case] uses: &str, #[case] expected: ActionRef) {
    assert_eq!(ActionRef::parse(uses), expected);
}

#[rstest]
#[case("actions/checkout@v4", true)]
#[case("org/repo/.github/workflows/build.yml@main", false)]
#[case("./.github/workflows/build.yml", false)]
#[case("./tools/lint", true)]
fn test_is_action(#[case] uses: &str, #[case] expected: bool) {
    assert_eq!(is_action(uses), expected);
}

#[test]
fn test_web_url() {
    assert_eq!(
        ActionRef::parse("actions/checkout@v4").web_url().as_deref(),
        Some("https://github.com/actions/checkout/tree/v4")
    );
    assert_eq!(ActionRef::parse("./local/action").web_url(), None);
    assert_eq!(ActionRef::parse("docker://alpine").web_url(), None);
}

#[test]
fn test_local_flag_and_path() {
    let local = ActionRef::parse("./.github/actions/build");
    assert!(local.is_local());
    assert!(!local.is_remote());
    assert_eq!(local.path(), Some("./.github/actions/build/action.yml"));

    let docker = ActionRef::parse("docker://alpine:3.18");
    assert!(!docker.is_fetchable());
    assert_eq!(docker.path(), None);
}

#[rstest]
#[case("actions/checkout@v4", "actions_checkout_v4")]
#[case("actions/setup-node/dist@v4", "actions_setup-node_dist_v4")]
#[case(
    "org/repo/.github/workflows/reuse.yml@main",
    "org_repo_github_workflows_reuse_yml_main"
)]
fn test_cache_key(#[case] uses: &str, #[case] expected: &str) {
    let action = GitHubAction::empty(uses, std::time::SystemTime::UNIX_EPOCH);
    assert_eq!(action.cache_key(), expected);
}
