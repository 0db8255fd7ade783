//! GeminiSynthesizer - direct REST API implementation of the query
//! synthesizer.
//!
//! Sends one `generateContent` request per profile analysis with a JSON
//! response schema, so the model's output is constrained to the Analysis
//! shape. The call is atomic from the pipeline's perspective: no retry, no
//! streaming.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use gitmatch_core::analysis::{Analysis, QuerySynthesizer, SYNTHESIZER_REPO_CAP};
use gitmatch_core::error::{GitmatchError, Result};
use gitmatch_core::profile::{Profile, RepositorySummary};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Query synthesizer backed by the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiSynthesizer {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiSynthesizer {
    /// Creates a synthesizer with the provided API key and the default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: BASE_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Loads the API key from the environment.
    ///
    /// Fails with `InferenceUnavailable` when no credential is configured.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            GitmatchError::inference_unavailable(format!("{API_KEY_ENV} is not set"))
        })?;
        if api_key.trim().is_empty() {
            return Err(GitmatchError::inference_unavailable(format!(
                "{API_KEY_ENV} is empty"
            )));
        }
        Ok(Self::new(api_key))
    }

    /// Overrides the Gemini model name if needed.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<String> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            self.base_url,
            model = self.model,
            api_key = self.api_key
        );

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| GitmatchError::http(format!("Gemini API request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            GitmatchError::inference_malformed(format!("failed to parse Gemini response: {err}"))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl QuerySynthesizer for GeminiSynthesizer {
    async fn synthesize(
        &self,
        profile: &Profile,
        repos: &[RepositorySummary],
    ) -> Result<Analysis> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: build_prompt(profile, repos)?,
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: analysis_schema(),
            },
        };

        debug!(login = %profile.login, repos = repos.len().min(SYNTHESIZER_REPO_CAP), "requesting profile analysis");
        let text = self.send_request(&request).await?;
        parse_analysis(&text)
    }
}

/// Repository payload sent to the model; a trimmed projection of the
/// summaries to bound cost and latency.
#[derive(Serialize)]
struct RepoPayload<'a> {
    name: &'a str,
    description: Option<&'a str>,
    language: Option<&'a str>,
    topics: &'a [String],
    stars: u32,
}

fn build_prompt(profile: &Profile, repos: &[RepositorySummary]) -> Result<String> {
    // First 15 of the already recency-sorted input; never re-sorted here.
    let payload: Vec<RepoPayload<'_>> = repos
        .iter()
        .take(SYNTHESIZER_REPO_CAP)
        .map(|r| RepoPayload {
            name: &r.name,
            description: r.description.as_deref(),
            language: r.language.as_deref(),
            topics: &r.topics,
            stars: r.stars,
        })
        .collect();
    let repo_json = serde_json::to_string_pretty(&payload)
        .map_err(|err| GitmatchError::internal(err.to_string()))?;

    Ok(format!(
        "Analyze this GitHub user profile and their recent repositories.\n\
         \n\
         User Bio: {bio}\n\
         User Name: {name}\n\
         \n\
         Repositories (most recently active, newest first):\n\
         {repo_json}\n\
         \n\
         GOAL: Identify the user's core technical skills, interests (e.g., \
         \"frontend\", \"compilers\", \"machine learning\"), and preferred \
         languages. Then generate 3 distinct, high-quality GitHub Search API \
         queries to find \"help wanted\" or \"good first issue\" issues in \
         OTHER repositories that match their skills.\n\
         \n\
         The search queries must be valid for the GitHub Issue Search API. \
         Examples of good query parts: 'language:typescript', \
         'label:\"good first issue\"', 'is:open', 'is:issue', 'no:assignee'. \
         Combine them intelligently. Exclude their own repos using \
         '-user:{login}'.",
        bio = profile.bio.as_deref().unwrap_or("No bio"),
        name = profile.name.as_deref().unwrap_or(&profile.login),
        login = profile.login,
    ))
}

/// JSON schema constraining the model output to the Analysis shape.
fn analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "expertise": { "type": "ARRAY", "items": { "type": "STRING" } },
            "summary": { "type": "STRING" },
            "suggestedQueries": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["expertise", "summary", "suggestedQueries"]
    })
}

/// Parses the model's text candidate into an Analysis.
///
/// Tolerates a markdown code fence around the JSON; any remaining shape
/// violation is `InferenceMalformed`.
fn parse_analysis(text: &str) -> Result<Analysis> {
    let trimmed = strip_code_fence(text.trim());
    serde_json::from_str(trimmed)
        .map_err(|err| GitmatchError::inference_malformed(err.to_string()))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| {
            GitmatchError::inference_malformed(
                "Gemini API returned no text in the response candidates",
            )
        })
}

fn map_http_error(status: StatusCode, body: String) -> GitmatchError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            GitmatchError::inference_unavailable(message)
        }
        StatusCode::TOO_MANY_REQUESTS => GitmatchError::RateLimited,
        _ => GitmatchError::http(format!("Gemini API: HTTP {status}: {message}")),
    }
}
