//! Repository DTO for `GET /users/{handle}/repos`.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use gitmatch_core::profile::RepositorySummary;

/// Raw repository record as delivered by the platform.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRepo {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    pub updated_at: DateTime<Utc>,
}

impl From<RawRepo> for RepositorySummary {
    fn from(raw: RawRepo) -> Self {
        RepositorySummary {
            name: raw.name,
            description: raw.description,
            language: raw.language,
            topics: raw.topics,
            stars: raw.stargazers_count,
            updated_at: raw.updated_at,
        }
    }
}
