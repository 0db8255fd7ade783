//! Handle normalization.

use reqwest::Url;

use gitmatch_core::error::{GitmatchError, Result};

const PROFILE_HOSTS: [&str; 2] = ["github.com", "www.github.com"];

/// Normalizes user input to a bare platform handle.
///
/// Accepts a bare handle (optionally `@`-prefixed) or a full profile-page URL
/// on the platform's domain; everything else is `InvalidInput`.
pub fn parse_handle(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(GitmatchError::invalid_input(input));
    }

    if let Ok(url) = Url::parse(trimmed) {
        if url.has_host() {
            return handle_from_url(&url).ok_or_else(|| GitmatchError::invalid_input(input));
        }
    }

    let handle = trimmed.strip_prefix('@').unwrap_or(trimmed);
    if is_valid_handle(handle) {
        Ok(handle.to_string())
    } else {
        Err(GitmatchError::invalid_input(input))
    }
}

fn handle_from_url(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    if !PROFILE_HOSTS.contains(&host) {
        return None;
    }
    let first_segment = url.path_segments()?.find(|s| !s.is_empty())?;
    is_valid_handle(first_segment).then(|| first_segment.to_string())
}

fn is_valid_handle(handle: &str) -> bool {
    !handle.is_empty()
        && handle
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
}
