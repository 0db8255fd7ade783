//! Query synthesizer trait definition.

use async_trait::async_trait;

use crate::analysis::Analysis;
use crate::error::Result;
use crate::profile::{Profile, RepositorySummary};

/// Maximum number of repository summaries included in the inference payload.
///
/// Selection is the first entries of the already recency-sorted input; the
/// synthesizer never re-sorts.
pub const SYNTHESIZER_REPO_CAP: usize = 15;

/// Synthesizes a skill analysis and search queries from a profile.
///
/// Implementations call an external inference service. The call is a single
/// request/response round trip: no retry, no streaming, no partial result.
#[async_trait]
pub trait QuerySynthesizer: Send + Sync {
    /// Produces an [`Analysis`] for the profile and its repository summaries.
    ///
    /// Fails with `InferenceUnavailable` when no inference credential is
    /// configured and `InferenceMalformed` when the service's output cannot
    /// be parsed into the Analysis shape.
    async fn synthesize(&self, profile: &Profile, repos: &[RepositorySummary])
    -> Result<Analysis>;
}
