//! Document links for `uses:` values.

use actionsense::TextSize;
use actionsense::ide::AnalysisHost;

#[test]
fn test_links_point_at_repositories() {
    let text = "\
jobs:
  build:
    steps:
      - uses: actions/checkout@v4
      - uses: ./.github/actions/setup
      - uses: actions/cache/save@v4
  deploy:
    uses: octo/deploy/.github/workflows/deploy.yml@v1
";
    let host = AnalysisHost::offline();
    let analysis = host.analysis(text, None, TextSize::new(0));
    let targets: Vec<_> = analysis
        .document_links()
        .into_iter()
        .map(|link| link.target)
        .collect();

    assert_eq!(
        targets,
        vec![
            "https://github.com/actions/checkout/tree/v4",
            "https://github.com/actions/cache/tree/v4",
            "https://github.com/octo/deploy/tree/v1",
        ]
    );
}
