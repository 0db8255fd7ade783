//! Match session use case.
//!
//! Orchestrates the full matching pipeline over `Arc<dyn Trait>`
//! collaborators: profile fetch, analysis, concurrent search rounds, and the
//! tag refinement loop. One session serves one front end; rounds are
//! user-gated and sequential, so the session holds exactly one step value at
//! a time.

use std::sync::Arc;

use tracing::{info, warn};

use gitmatch_core::analysis::{Analysis, QuerySynthesizer};
use gitmatch_core::error::{GitmatchError, Result};
use gitmatch_core::filter::filter_issues;
use gitmatch_core::issue::{Issue, IssueSearch, ResultSet};
use gitmatch_core::profile::{Profile, ProfileSource};
use gitmatch_core::search::execute_queries;
use gitmatch_core::session::SessionStep;
use gitmatch_core::tags::TagRefinement;
use gitmatch_infrastructure::{GitHubClient, parse_handle};
use gitmatch_interaction::GeminiSynthesizer;

/// An interactive matching session.
///
/// Single logical thread of control: the only true concurrency is the
/// search executor's fan-out, and every completion is folded back into the
/// session state one at a time by these methods.
pub struct MatchSession {
    profile_source: Arc<dyn ProfileSource>,
    synthesizer: Arc<dyn QuerySynthesizer>,
    issue_search: Arc<dyn IssueSearch>,
    step: SessionStep,
    refinement: TagRefinement,
}

impl MatchSession {
    /// Creates an idle session over the given collaborators.
    pub fn new(
        profile_source: Arc<dyn ProfileSource>,
        synthesizer: Arc<dyn QuerySynthesizer>,
        issue_search: Arc<dyn IssueSearch>,
    ) -> Self {
        Self {
            profile_source,
            synthesizer,
            issue_search,
            step: SessionStep::Idle,
            refinement: TagRefinement::new(Vec::new()),
        }
    }

    /// Creates a session over the real platform and inference collaborators.
    ///
    /// The GitHub token is session-scoped: a new session (or a new call to
    /// this constructor) is the only way to change it. Fails with
    /// `InferenceUnavailable` when no inference credential is configured.
    pub fn with_default_collaborators(github_token: Option<String>) -> Result<Self> {
        let github = Arc::new(GitHubClient::new(github_token));
        let synthesizer = Arc::new(GeminiSynthesizer::from_env()?);
        Ok(Self::new(github.clone(), synthesizer, github))
    }

    /// The current session step.
    pub fn step(&self) -> &SessionStep {
        &self.step
    }

    /// The tag refinement state machine.
    pub fn refinement(&self) -> &TagRefinement {
        &self.refinement
    }

    /// Runs the initial pipeline for a handle or profile URL.
    ///
    /// Resets the tag pools and selection, then walks
    /// profile → repositories → analysis → first search round. Any failure
    /// aborts the whole round, discards partial state, and surfaces a single
    /// error step.
    pub async fn start_search(&mut self, input: &str) {
        self.refinement.reset();
        self.step = SessionStep::Analyzing;

        match self.run_initial_round(input).await {
            Ok((profile, analysis, issues)) => {
                info!(login = %profile.login, hits = issues.len(), "initial round settled");
                self.refinement = TagRefinement::new(analysis.expertise.clone());
                self.step = SessionStep::Results {
                    profile,
                    analysis,
                    issues,
                };
            }
            Err(err) => {
                warn!(%err, "initial round failed");
                self.step = SessionStep::Error {
                    message: err.to_string(),
                };
            }
        }
    }

    async fn run_initial_round(&mut self, input: &str) -> Result<(Profile, Analysis, ResultSet)> {
        let handle = parse_handle(input)?;
        let profile = self.profile_source.get_profile(&handle).await?;
        let repos = self.profile_source.get_repositories(&handle).await?;
        // Hard stop before any inference or search call.
        if repos.is_empty() {
            return Err(GitmatchError::no_repositories(&handle));
        }

        let analysis = self.synthesizer.synthesize(&profile, &repos).await?;
        self.step = SessionStep::Searching {
            profile: profile.clone(),
            analysis: analysis.clone(),
        };

        let outcome =
            execute_queries(self.issue_search.as_ref(), &analysis.suggested_queries).await?;
        if outcome.is_partial() {
            warn!(
                failed = outcome.failures.len(),
                "some queries failed; surviving batches proceed"
            );
        }
        Ok((profile, analysis, outcome.results))
    }

    /// Symmetric select/deselect of a tag. No network activity; only the
    /// client-side filter observes the change until `refine` is called.
    pub fn toggle_tag(&mut self, tag: &str) {
        self.refinement.toggle_tag(tag);
    }

    /// Adds a user-authored tag and forces it into the selection.
    pub fn add_custom_tag(&mut self, tag: &str) {
        self.refinement.add_custom_tag(tag);
    }

    /// Runs a refinement round from the current selection.
    ///
    /// Builds one disjunctive query, issues exactly one search, and replaces
    /// the displayed result set with the fresh one. A no-op unless the
    /// session shows results and at least one tag is selected. On failure
    /// the session moves to its error step; the prior result set is not
    /// separately recoverable without a new top-level search.
    pub async fn refine(&mut self) {
        let SessionStep::Results {
            profile, analysis, ..
        } = &self.step
        else {
            return;
        };
        let Some(query) = self.refinement.begin_refine() else {
            return;
        };
        let (profile, analysis) = (profile.clone(), analysis.clone());

        info!(query = %query, "refining search");
        self.step = SessionStep::Searching {
            profile: profile.clone(),
            analysis: analysis.clone(),
        };

        let outcome = execute_queries(self.issue_search.as_ref(), &[query]).await;
        self.refinement.finish_refine();

        match outcome {
            Ok(outcome) => {
                self.step = SessionStep::Results {
                    profile,
                    analysis,
                    issues: outcome.results,
                };
            }
            Err(err) => {
                warn!(%err, "refinement round failed");
                self.step = SessionStep::Error {
                    message: err.to_string(),
                };
            }
        }
    }

    /// The issues currently visible: the displayed result set narrowed by
    /// the active selection. Pure; recomputed on every call.
    pub fn visible_issues(&self) -> Vec<Issue> {
        match self.step.results() {
            Some(results) => filter_issues(results, self.refinement.selection()),
            None => Vec::new(),
        }
    }

    /// Returns the session to idle and clears the tag pools.
    pub fn reset(&mut self) {
        self.refinement.reset();
        self.step = SessionStep::Idle;
    }
}
