//! Common document fixtures for tests.

/// `actions/checkout` metadata as served by the repository host.
pub const CHECKOUT_ACTION: &str = r#"
name: Checkout
description: Checkout a Git repository at a particular version
inputs:
  repository:
    description: Repository name with owner
    default: ${{ github.repository }}
  ref:
    description: The branch, tag or SHA to checkout
  token:
    description: Personal access token used to fetch the repository
  fetch-depth:
    description: Number of commits to fetch
    default: 1
outputs:
  commit:
    description: The commit SHA that was checked out
runs:
  using: node20
  main: dist/index.js
"#;

/// A reusable workflow in another repository.
pub const DEPLOY_WORKFLOW: &str = r#"
on:
  workflow_call:
    inputs:
      environment:
        description: Target environment
        required: true
    outputs:
      url:
        description: Deployed URL
        value: ${{ jobs.deploy.outputs.url }}
jobs:
  deploy:
    runs-on: ubuntu-latest
    outputs:
      url: ${{ steps.ship.outputs.url }}
    steps:
      - id: ship
        run: echo "url=https://example.com" >> "$GITHUB_OUTPUT"
"#;

/// A composite action checked into the project.
pub const SETUP_ACTION: &str = r#"
name: Setup
inputs:
  toolchain:
    description: Toolchain to install
outputs:
  cache-hit:
    description: Whether the cache was restored
    value: ${{ steps.cache.outputs.hit }}
runs:
  using: composite
  steps:
    - id: cache
      shell: bash
      run: echo "hit=true" >> $GITHUB_OUTPUT
"#;
