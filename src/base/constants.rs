//! Workflow field names and resolution constants.

use std::time::Duration;

// ============================================================================
// WORKFLOW FIELD NAMES
// ============================================================================

pub const FIELD_ON: &str = "on";
/// `on` decoded as a YAML 1.1 boolean key.
pub const FIELD_ON_BOOLEAN: &str = "true";
pub const FIELD_WORKFLOW_CALL: &str = "workflow_call";
pub const FIELD_JOBS: &str = "jobs";
pub const FIELD_STEPS: &str = "steps";
pub const FIELD_NEEDS: &str = "needs";
pub const FIELD_ENVS: &str = "env";
pub const FIELD_GITHUB: &str = "github";
pub const FIELD_INPUTS: &str = "inputs";
pub const FIELD_OUTPUTS: &str = "outputs";
pub const FIELD_SECRETS: &str = "secrets";
pub const FIELD_USES: &str = "uses";
pub const FIELD_WITH: &str = "with";
pub const FIELD_RUN: &str = "run";
pub const FIELD_RUNS: &str = "runs";
pub const FIELD_ID: &str = "id";
pub const FIELD_NAME: &str = "name";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_RUNS_ON: &str = "runs-on";
pub const FIELD_OS: &str = "os";

/// Secret every workflow run receives without declaring it.
pub const IMPLICIT_SECRET: &str = "GITHUB_TOKEN";

// ============================================================================
// ACTION REFERENCES
// ============================================================================

/// Definition file assumed when a `uses:` reference names a directory.
pub const DEFAULT_ACTION_FILE: &str = "action.yml";

/// Path segment that marks a reusable workflow reference.
pub const WORKFLOWS_SEGMENT: &str = "/workflows/";

pub const DOCKER_PREFIX: &str = "docker://";

pub const GITHUB_WEB_URL: &str = "https://github.com";
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Media type that makes the contents API return the raw file body.
pub const RAW_CONTENT_MEDIA_TYPE: &str = "application/vnd.github.raw";

// ============================================================================
// CACHE LIFETIMES
// ============================================================================

/// How long a successfully resolved action stays cached.
pub const SUCCESS_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// How long a failed resolution stays cached before it is retried.
pub const FAILURE_TTL: Duration = Duration::from_secs(10 * 60);
