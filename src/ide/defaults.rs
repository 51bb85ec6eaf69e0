//! Built-in expression contexts.

/// Context roots offered when nothing more specific applies.
pub(crate) const DEFAULT_ROOTS: &[(&str, &str)] = &[
    ("github", "Information about the workflow run"),
    ("env", "Variables set in the workflow, job or step"),
    ("vars", "Configuration variables of the repository, environment or organization"),
    ("job", "Information about the currently running job"),
    ("jobs", "Outputs of the jobs of a reusable workflow"),
    ("steps", "Information about the steps of the current job that have run"),
    ("runner", "Information about the runner executing the job"),
    ("secrets", "Secrets available to the workflow run"),
    ("strategy", "Matrix execution strategy of the current job"),
    ("matrix", "Matrix properties of the current job"),
    ("needs", "Outputs of the jobs the current job depends on"),
    ("inputs", "Inputs of a reusable or manually triggered workflow"),
];

/// Fields of the `github` context.
pub(crate) const GITHUB_FIELDS: &[(&str, &str)] = &[
    ("action", "Name of the running action, or the id of the step"),
    ("action_path", "Path where the running action is located"),
    ("action_ref", "Ref of the running action"),
    ("action_repository", "Owner and repository name of the running action"),
    ("action_status", "Result of a composite action"),
    ("actor", "Username of the user that triggered the initial run"),
    ("actor_id", "Account id of the user that triggered the initial run"),
    ("api_url", "URL of the REST API"),
    ("base_ref", "Target branch of a pull request"),
    ("env", "Path of the file that sets environment variables from commands"),
    ("event", "Full event webhook payload"),
    ("event_name", "Name of the event that triggered the run"),
    ("event_path", "Path of the file with the full event webhook payload"),
    ("graphql_url", "URL of the GraphQL API"),
    ("head_ref", "Source branch of a pull request"),
    ("job", "Id of the current job"),
    ("output", "Path of the file that sets step outputs from commands"),
    ("path", "Path of the file that sets PATH from commands"),
    ("ref", "Fully-formed ref of the branch or tag that triggered the run"),
    ("ref_name", "Short ref name of the branch or tag that triggered the run"),
    ("ref_protected", "Whether branch protections are configured for the ref"),
    ("ref_type", "Type of ref that triggered the run: branch or tag"),
    ("repository", "Owner and repository name"),
    ("repository_id", "Id of the repository"),
    ("repository_owner", "Owner of the repository"),
    ("repository_owner_id", "Account id of the repository owner"),
    ("repositoryUrl", "Git URL of the repository"),
    ("retention_days", "Days that logs and artifacts are kept"),
    ("run_id", "Unique number of each workflow run"),
    ("run_number", "Number of each run of this workflow"),
    ("run_attempt", "Attempt number of this run"),
    ("secret_source", "Source of the secrets used by the run"),
    ("server_url", "URL of the GitHub server"),
    ("sha", "Commit SHA that triggered the run"),
    ("token", "Token to authenticate on behalf of the installed app"),
    ("triggering_actor", "Username of the user that initiated the run"),
    ("workflow", "Name of the workflow"),
    ("workflow_ref", "Ref path of the workflow"),
    ("workflow_sha", "Commit SHA of the workflow file"),
    ("workspace", "Default working directory on the runner"),
];

/// Description of a default root, empty if unknown.
pub(crate) fn root_description(name: &str) -> &'static str {
    DEFAULT_ROOTS
        .iter()
        .find(|(root, _)| *root == name)
        .map(|(_, description)| *description)
        .unwrap_or_default()
}
