//! Issue domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A label attached to an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    /// Display color as a hex string, without the leading `#`.
    pub color: String,
}

/// An open-source issue surfaced by the search endpoint.
///
/// Issues are immutable value records, fetched fresh on every query.
/// `repo_full_name` is derived by the infrastructure layer from the raw
/// record's repository API URL; it is never delivered directly by the
/// search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Platform-assigned unique identity.
    pub id: u64,
    /// Issue number within its repository.
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    /// Open/closed state as reported by the platform.
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub comments: u64,
    pub labels: Vec<Label>,
    /// Owning repository as `owner/name`.
    pub repo_full_name: String,
    /// Link to the issue's public page.
    pub html_url: String,
}

impl Issue {
    /// Lower-cased text corpus used by the client-side filter: title, body,
    /// owning repository, and all label names, space-joined.
    pub fn filter_corpus(&self) -> String {
        let labels = self
            .labels
            .iter()
            .map(|l| l.name.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "{} {} {} {}",
            self.title,
            self.body.as_deref().unwrap_or(""),
            self.repo_full_name,
            labels
        )
        .to_lowercase()
    }
}
