//! Profile data source trait definition.

use async_trait::async_trait;

use crate::error::Result;
use crate::profile::{Profile, RepositorySummary};

/// Data source for developer profiles and their repositories.
///
/// Implementations talk to the hosting platform's REST API. The session auth
/// token, if any, is held by the implementation and applied to every request.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetches the profile for a bare handle.
    ///
    /// Fails with `ProfileNotFound` when no such handle exists and
    /// `RateLimited` when the platform quota is exhausted.
    async fn get_profile(&self, handle: &str) -> Result<Profile>;

    /// Lists the handle's repositories, most recently updated first,
    /// capped at 30 entries.
    async fn get_repositories(&self, handle: &str) -> Result<Vec<RepositorySummary>>;
}
