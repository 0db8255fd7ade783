//! GitHub REST client implementing the core collaborator traits.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use tracing::debug;

use gitmatch_core::error::{GitmatchError, Result};
use gitmatch_core::issue::{Issue, IssueSearch};
use gitmatch_core::profile::{Profile, ProfileSource, RepositorySummary};

use crate::dto::{RawRepo, RawUser, SearchIssuesResponse};

const BASE_URL: &str = "https://api.github.com";
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("gitmatch/", env!("CARGO_PKG_VERSION"));

/// Caps applied by the client, matching what the platform endpoints allow.
const REPO_PAGE_SIZE: u32 = 30;
const SEARCH_PAGE_SIZE: u32 = 100;

/// Client for the platform's REST endpoints.
///
/// Holds the session auth token (set once per top-level search, read-only
/// afterwards) and applies it to every outbound request.
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Creates a client with an optional personal access token.
    ///
    /// Unauthenticated requests work but are tightly rate limited by the
    /// platform.
    pub fn new(token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: BASE_URL.to_string(),
            token,
        }
    }

    /// Overrides the API base URL (for pointing at an enterprise host).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let mut request = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .header(reqwest::header::ACCEPT, ACCEPT_HEADER)
            .header(reqwest::header::USER_AGENT, USER_AGENT);
        if let Some(token) = &self.token {
            request = request.header(reqwest::header::AUTHORIZATION, format!("token {token}"));
        }
        request
    }

    async fn send<T>(&self, request: RequestBuilder, context: &str) -> Result<(StatusCode, Option<T>)>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(|err| GitmatchError::http(format!("{context}: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Ok((status, None));
        }

        let body = response
            .json::<T>()
            .await
            .map_err(|err| GitmatchError::http(format!("{context}: invalid response body: {err}")))?;
        Ok((status, Some(body)))
    }
}

/// Maps a non-success status onto the shared taxonomy.
///
/// 403 and 429 both mean quota exhaustion on this platform; everything else
/// surfaces as a generic HTTP failure with its context.
fn map_status(status: StatusCode, context: &str) -> GitmatchError {
    match status {
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => GitmatchError::RateLimited,
        _ => GitmatchError::http(format!("{context}: HTTP {status}")),
    }
}

#[async_trait]
impl ProfileSource for GitHubClient {
    async fn get_profile(&self, handle: &str) -> Result<Profile> {
        let context = "fetch user";
        let (status, body) = self
            .send::<RawUser>(self.get(&format!("/users/{handle}")), context)
            .await?;

        match body {
            Some(raw) => Ok(raw.into()),
            None if status == StatusCode::NOT_FOUND => {
                Err(GitmatchError::profile_not_found(handle))
            }
            None => Err(map_status(status, context)),
        }
    }

    async fn get_repositories(&self, handle: &str) -> Result<Vec<RepositorySummary>> {
        let context = "fetch repositories";
        let request = self
            .get(&format!("/users/{handle}/repos"))
            .query(&[("sort", "updated"), ("direction", "desc")])
            .query(&[("per_page", REPO_PAGE_SIZE)]);

        let (status, body) = self.send::<Vec<RawRepo>>(request, context).await?;
        let raw = body.ok_or_else(|| map_status(status, context))?;

        debug!(handle = %handle, count = raw.len(), "fetched repositories");
        Ok(raw.into_iter().map(RepositorySummary::from).collect())
    }
}

#[async_trait]
impl IssueSearch for GitHubClient {
    async fn search_issues(&self, query: &str) -> Result<Vec<Issue>> {
        let context = "search issues";
        let request = self
            .get("/search/issues")
            .query(&[("q", query)])
            .query(&[("per_page", SEARCH_PAGE_SIZE)]);

        let (status, body) = self.send::<SearchIssuesResponse>(request, context).await?;
        let raw = body.ok_or_else(|| map_status(status, context))?;

        let total = raw.items.len();
        let issues: Vec<Issue> = raw
            .items
            .into_iter()
            .filter_map(|item| item.into_domain())
            .collect();
        if issues.len() < total {
            debug!(
                dropped = total - issues.len(),
                "dropped records with unparseable repository URLs"
            );
        }
        Ok(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> GitHubClient {
        GitHubClient::new(Some("secret".to_string())).with_base_url(server.base_url())
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            map_status(StatusCode::FORBIDDEN, "x"),
            GitmatchError::RateLimited
        );
        assert_eq!(
            map_status(StatusCode::TOO_MANY_REQUESTS, "x"),
            GitmatchError::RateLimited
        );
        assert!(matches!(
            map_status(StatusCode::INTERNAL_SERVER_ERROR, "x"),
            GitmatchError::Http(_)
        ));
    }

    #[tokio::test]
    async fn test_get_profile_sends_auth_and_maps_fields() {
        let server = MockServer::start();
        let user = server.mock(|when, then| {
            when.method(GET)
                .path("/users/octocat")
                .header("accept", ACCEPT_HEADER)
                .header("authorization", "token secret")
                .header("user-agent", USER_AGENT);
            then.status(200).json_body(json!({
                "login": "octocat",
                "name": "Octo Cat",
                "bio": "Systems tinkerer",
                "html_url": "https://github.com/octocat",
                "public_repos": 8,
                "followers": 42
            }));
        });

        let profile = client_for(&server).get_profile("octocat").await.unwrap();
        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.name.as_deref(), Some("Octo Cat"));
        assert_eq!(profile.followers, 42);
        user.assert_calls(1);
    }

    #[tokio::test]
    async fn test_get_profile_missing_handle_is_not_found() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users/ghost");
            then.status(404).json_body(json!({"message": "Not Found"}));
        });

        let err = client_for(&server).get_profile("ghost").await.unwrap_err();
        assert_eq!(err, GitmatchError::profile_not_found("ghost"));
    }

    #[tokio::test]
    async fn test_get_repositories_requests_recency_sorted_page() {
        let server = MockServer::start();
        let repos_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/users/octocat/repos")
                .query_param("sort", "updated")
                .query_param("direction", "desc")
                .query_param("per_page", "30");
            then.status(200).json_body(json!([{
                "name": "widgets",
                "description": "A widget press",
                "language": "Rust",
                "topics": ["cli"],
                "stargazers_count": 7,
                "updated_at": "2024-03-01T12:00:00Z"
            }]));
        });

        let repos = client_for(&server)
            .get_repositories("octocat")
            .await
            .unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "widgets");
        assert_eq!(repos[0].stars, 7);
        repos_mock.assert_calls(1);
    }

    #[tokio::test]
    async fn test_search_issues_drops_unparseable_repository_urls() {
        let server = MockServer::start();
        let search = server.mock(|when, then| {
            when.method(GET)
                .path("/search/issues")
                .query_param("q", "language:rust is:open")
                .query_param("per_page", "100");
            then.status(200).json_body(json!({
                "total_count": 2,
                "items": [
                    {
                        "id": 1,
                        "number": 10,
                        "title": "Add tracing spans",
                        "body": "Spans would help debugging.",
                        "state": "open",
                        "created_at": "2024-03-01T12:00:00Z",
                        "comments": 2,
                        "labels": [{"name": "good first issue", "color": "7057ff"}],
                        "repository_url": "https://api.github.com/repos/octo/widgets",
                        "html_url": "https://github.com/octo/widgets/issues/10"
                    },
                    {
                        "id": 2,
                        "number": 11,
                        "title": "Broken record",
                        "body": null,
                        "state": "open",
                        "created_at": "2024-03-01T12:00:00Z",
                        "comments": 0,
                        "labels": [],
                        "repository_url": "nonsense",
                        "html_url": "https://github.com/octo/widgets/issues/11"
                    }
                ]
            }));
        });

        let issues = client_for(&server)
            .search_issues("language:rust is:open")
            .await
            .unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].repo_full_name, "octo/widgets");
        assert_eq!(issues[0].labels[0].name, "good first issue");
        search.assert_calls(1);
    }

    #[tokio::test]
    async fn test_search_issues_quota_exhaustion_is_rate_limited() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search/issues");
            then.status(403)
                .json_body(json!({"message": "API rate limit exceeded"}));
        });

        let err = client_for(&server).search_issues("q").await.unwrap_err();
        assert!(err.is_rate_limited());
    }

    #[tokio::test]
    async fn test_unauthenticated_client_fetches_profile() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users/octocat");
            then.status(200).json_body(json!({
                "login": "octocat",
                "name": null,
                "bio": null,
                "html_url": "https://github.com/octocat",
                "public_repos": 0,
                "followers": 0
            }));
        });

        let client = GitHubClient::new(None).with_base_url(server.base_url());
        let profile = client.get_profile("octocat").await.unwrap();
        assert_eq!(profile.login, "octocat");
    }
}
