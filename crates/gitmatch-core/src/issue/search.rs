//! Issue search endpoint trait definition.

use async_trait::async_trait;

use crate::error::Result;
use crate::issue::Issue;

/// The platform's issue-search endpoint.
///
/// One call issues one query and returns at most 100 records, already
/// enriched with the derived owning-repository name. Records whose
/// repository URL cannot be parsed are dropped by the implementation
/// rather than failing the batch.
#[async_trait]
pub trait IssueSearch: Send + Sync {
    /// Runs a single search query.
    ///
    /// Fails with `RateLimited` on quota exhaustion or `Http` on any other
    /// endpoint error.
    async fn search_issues(&self, query: &str) -> Result<Vec<Issue>>;
}
