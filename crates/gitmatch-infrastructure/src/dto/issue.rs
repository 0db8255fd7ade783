//! Issue DTOs for `GET /search/issues` and the owning-repository derivation.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use gitmatch_core::issue::{Issue, Label};

/// Envelope of the issue-search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchIssuesResponse {
    #[serde(default)]
    pub items: Vec<RawIssue>,
}

/// Raw label record.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLabel {
    pub name: String,
    #[serde(default)]
    pub color: String,
}

/// Raw issue record as delivered by the search endpoint.
///
/// The endpoint does not deliver the owning repository's full name directly;
/// it must be derived from `repository_url`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawIssue {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    pub state: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub labels: Vec<RawLabel>,
    pub repository_url: String,
    pub html_url: String,
}

impl RawIssue {
    /// Converts into the domain model, deriving the owning repository name.
    ///
    /// Returns `None` when `repository_url` is unparseable; the caller drops
    /// such records from the batch instead of failing the whole batch.
    pub fn into_domain(self) -> Option<Issue> {
        let Some(repo_full_name) = repo_full_name_from_api_url(&self.repository_url) else {
            debug!(id = self.id, url = %self.repository_url, "dropping issue with unparseable repository URL");
            return None;
        };

        Some(Issue {
            id: self.id,
            number: self.number,
            title: self.title,
            body: self.body,
            state: self.state,
            created_at: self.created_at,
            comments: self.comments,
            labels: self
                .labels
                .into_iter()
                .map(|l| Label {
                    name: l.name,
                    color: l.color,
                })
                .collect(),
            repo_full_name,
            html_url: self.html_url,
        })
    }
}

/// Extracts `owner/name` from a repository API URL such as
/// `https://api.github.com/repos/rust-lang/cargo`.
///
/// The derivation is the last two path segments. Anything without two
/// non-empty trailing segments is rejected.
pub fn repo_full_name_from_api_url(url: &str) -> Option<String> {
    let mut segments = url.trim_end_matches('/').rsplit('/');
    let name = segments.next().filter(|s| !s.is_empty())?;
    let owner = segments.next().filter(|s| !s.is_empty())?;
    // Require a scheme-ish prefix so bare words are not mistaken for URLs.
    segments.next()?;
    Some(format!("{owner}/{name}"))
}
