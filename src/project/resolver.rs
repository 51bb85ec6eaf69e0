//! `uses:` → action metadata, through the cache.

use std::sync::Arc;
use std::time::SystemTime;

use indexmap::IndexMap;
use text_size::TextSize;
use tracing::{debug, warn};

use super::action::GitHubAction;
use super::cache::ActionCache;
use super::clock::{Clock, SystemClock};
use super::config::ResolverConfig;
use super::error::{FetchError, ResolveError};
use super::fetch::{AccountProvider, AuthenticatedFetcher, ContentFetcher, NoProjectFiles, ProjectFiles};
use super::uses::ActionRef;
use crate::hir::{ActionLookup, DocumentKind, WorkflowIndex};
use crate::syntax;

type Parameters = (IndexMap<String, String>, IndexMap<String, String>);

/// Resolves `uses:` references to their declared inputs and outputs.
///
/// Resolution never fails from the caller's point of view. A reference that
/// cannot be fetched or parsed yields an empty entry that is retried once
/// the failure lifetime has passed.
pub struct ActionResolver {
    cache: Arc<ActionCache>,
    fetcher: Arc<dyn ContentFetcher>,
    files: Arc<dyn ProjectFiles>,
    accounts: Option<Arc<dyn AccountProvider>>,
    clock: Arc<dyn Clock>,
    config: ResolverConfig,
}

impl ActionResolver {
    pub fn new(cache: Arc<ActionCache>, fetcher: Arc<dyn ContentFetcher>) -> Self {
        Self {
            cache,
            fetcher,
            files: Arc::new(NoProjectFiles),
            accounts: None,
            clock: Arc::new(SystemClock),
            config: ResolverConfig::default(),
        }
    }

    /// Read local (`./…`) references through `files`.
    pub fn with_project_files(mut self, files: Arc<dyn ProjectFiles>) -> Self {
        self.files = files;
        self
    }

    /// Only fetch remote references while `accounts` reports an account.
    pub fn with_accounts(mut self, accounts: Arc<dyn AccountProvider>) -> Self {
        self.fetcher = Arc::new(AuthenticatedFetcher::new(
            self.fetcher.clone(),
            accounts.clone(),
        ));
        self.accounts = Some(accounts);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn cache(&self) -> &Arc<ActionCache> {
        &self.cache
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Whether remote fetches can be authenticated. Without an account
    /// provider the fetcher is trusted to handle it.
    pub fn account_available(&self) -> bool {
        self.accounts
            .as_ref()
            .is_none_or(|accounts| accounts.has_account())
    }

    /// Metadata for `uses`, from the cache when it is still valid.
    pub fn resolve(&self, uses: &str) -> Arc<GitHubAction> {
        let now = self.clock.now();
        if let Some(cached) = self.cache.get_fresh(uses, now) {
            debug!(uses, "action cache hit");
            return cached;
        }

        debug!(uses, "action cache miss");
        let action = Arc::new(self.resolve_uncached(uses, now));
        self.cache.insert(action.clone());
        action
    }

    fn resolve_uncached(&self, uses: &str, now: SystemTime) -> GitHubAction {
        let mut action = GitHubAction::empty(uses, now + self.config.success_ttl);
        if !action.reference.is_fetchable() {
            debug!(uses, reference = %action.reference, "reference carries no metadata");
            return action;
        }

        match self.load(&action.reference, action.is_action) {
            Ok((inputs, outputs)) => {
                debug!(
                    uses,
                    inputs = inputs.len(),
                    outputs = outputs.len(),
                    "action resolved"
                );
                action.inputs = inputs;
                action.outputs = outputs;
            }
            Err(err) => {
                warn!(uses, "action resolution failed: {err}");
                action.expires_at = now + self.config.failure_ttl;
            }
        }
        action
    }

    fn load(&self, reference: &ActionRef, is_action: bool) -> Result<Parameters, ResolveError> {
        let content = self.fetch_definition(reference)?;
        extract_parameters(&content, is_action)
    }

    fn fetch_definition(&self, reference: &ActionRef) -> Result<String, ResolveError> {
        match reference {
            ActionRef::Local { path } => self
                .files
                .read_project_relative_file(path)
                .ok_or_else(|| FetchError::not_found(path.as_str()).into()),
            ActionRef::Remote {
                owner,
                repo,
                path,
                git_ref,
            } => Ok(self.fetcher.fetch_remote_file(owner, repo, path, git_ref)?),
            other => Err(ResolveError::Unsupported(other.to_string())),
        }
    }
}

/// Declared inputs and outputs of a fetched definition.
///
/// Actions declare both at the top level; reusable workflows under their
/// triggers, with outputs only under `on.workflow_call`.
fn extract_parameters(content: &str, is_action: bool) -> Result<Parameters, ResolveError> {
    let tree = syntax::try_parse(content)?;
    let kind = if is_action {
        DocumentKind::Action
    } else {
        DocumentKind::Workflow
    };
    let index = WorkflowIndex::from_tree(Some(tree), kind, TextSize::default());
    Ok((index.inputs(), index.outputs()))
}

impl ActionLookup for ActionResolver {
    fn inputs_of(&self, uses: &str) -> IndexMap<String, String> {
        self.resolve(uses).inputs.clone()
    }

    fn outputs_of(&self, uses: &str) -> IndexMap<String, String> {
        self.resolve(uses).outputs.clone()
    }
}
