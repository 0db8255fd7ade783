//! Profile domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A developer profile on the hosting platform.
///
/// Immutable once fetched for a session; replaced wholesale when a new
/// top-level search begins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique platform handle (login name, not a URL).
    pub login: String,
    /// Display name, if the user set one.
    pub name: Option<String>,
    /// Free-form bio text.
    pub bio: Option<String>,
    /// Link to the public profile page.
    pub html_url: String,
    /// Number of public repositories.
    pub public_repos: u32,
    /// Follower count.
    pub followers: u32,
}

/// A bounded summary of one of the profile's repositories.
///
/// Derived from the platform's repository listing, recency-sorted and capped
/// at 30 entries by the data source. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub description: Option<String>,
    /// Primary language as reported by the platform.
    pub language: Option<String>,
    /// Topic tags in platform order.
    pub topics: Vec<String>,
    pub stars: u32,
    pub updated_at: DateTime<Utc>,
}
