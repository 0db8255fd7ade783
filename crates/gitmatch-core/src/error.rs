//! Error types for the GitMatch pipeline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire matching pipeline.
///
/// Variants mirror the failure taxonomy of the pipeline: input validation,
/// profile lookup, inference, and search. Errors are serializable so a front
/// end embedding the pipeline can transport them across process boundaries.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum GitmatchError {
    /// The user-supplied handle or profile URL could not be parsed.
    #[error("Invalid GitHub URL or username: '{0}'")]
    InvalidInput(String),

    /// No profile exists for the given handle.
    #[error("User '{handle}' not found")]
    ProfileNotFound { handle: String },

    /// The profile has zero public repositories, so analysis is impossible.
    #[error("No public repositories found for '{handle}'. Cannot analyze profile.")]
    NoRepositories { handle: String },

    /// The hosting platform rejected the request for quota reasons.
    #[error("GitHub API rate limit exceeded. Please provide a token.")]
    RateLimited,

    /// No inference credential is configured.
    #[error("Inference service unavailable: {0}")]
    InferenceUnavailable(String),

    /// The inference service replied with something that is not an Analysis.
    #[error("Inference output malformed: {0}")]
    InferenceMalformed(String),

    /// Every query in a search round failed.
    #[error("All {attempted} search queries failed")]
    SearchFailed { attempted: usize },

    /// Transport or endpoint error outside the taxonomy above.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Internal error (should not happen in normal operation).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GitmatchError {
    /// Creates an InvalidInput error.
    pub fn invalid_input(input: impl Into<String>) -> Self {
        Self::InvalidInput(input.into())
    }

    /// Creates a ProfileNotFound error.
    pub fn profile_not_found(handle: impl Into<String>) -> Self {
        Self::ProfileNotFound {
            handle: handle.into(),
        }
    }

    /// Creates a NoRepositories error.
    pub fn no_repositories(handle: impl Into<String>) -> Self {
        Self::NoRepositories {
            handle: handle.into(),
        }
    }

    /// Creates an InferenceUnavailable error.
    pub fn inference_unavailable(message: impl Into<String>) -> Self {
        Self::InferenceUnavailable(message.into())
    }

    /// Creates an InferenceMalformed error.
    pub fn inference_malformed(message: impl Into<String>) -> Self {
        Self::InferenceMalformed(message.into())
    }

    /// Creates an Http error.
    pub fn http(message: impl Into<String>) -> Self {
        Self::Http(message.into())
    }

    /// Creates an Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited)
    }

    /// Check if this is a profile lookup failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ProfileNotFound { .. })
    }

    /// Check if this error came from the inference service.
    pub fn is_inference(&self) -> bool {
        matches!(
            self,
            Self::InferenceUnavailable(_) | Self::InferenceMalformed(_)
        )
    }
}

impl From<serde_json::Error> for GitmatchError {
    fn from(err: serde_json::Error) -> Self {
        Self::InferenceMalformed(err.to_string())
    }
}

/// A type alias for `Result<T, GitmatchError>`.
pub type Result<T> = std::result::Result<T, GitmatchError>;
