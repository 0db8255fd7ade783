//! User DTO for `GET /users/{handle}`.

use serde::Deserialize;

use gitmatch_core::profile::Profile;

/// Raw user record as delivered by the platform.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
}

impl From<RawUser> for Profile {
    fn from(raw: RawUser) -> Self {
        Profile {
            login: raw.login,
            name: raw.name,
            bio: raw.bio,
            html_url: raw.html_url,
            public_repos: raw.public_repos,
            followers: raw.followers,
        }
    }
}
