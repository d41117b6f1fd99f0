// src/github/client.rs
// =============================================================================
// A small GitHub REST client.
//
// It owns one reqwest::Client configured with the headers every API call
// needs (auth token, user agent) and exposes a single `get` helper. Every
// failed call is logged here, right where the response is seen, and then
// handed back to the caller as an ApiError.
// =============================================================================

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response};
use serde::Deserialize;
use url::Url;

use crate::config::{GithubConfig, USER_AGENT};
use crate::error::ApiError;

/// Ask the API for plain JSON
pub(crate) const JSON_MEDIA_TYPE: &str = "application/vnd.github.v3+json";
/// Ask the contents API for the file rendered as HTML
pub(crate) const HTML_MEDIA_TYPE: &str = "application/vnd.github.v3.html";

// GitHub's error bodies look like {"message": "Not Found", "documentation_url": "..."}
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    api_url: Url,
}

impl GithubClient {
    pub fn new(config: &GithubConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| ApiError::InvalidToken)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|source| ApiError::Transport {
                url: config.api_url.to_string(),
                source,
            })?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
        })
    }

    // Builds {api_url}/{segments...}, percent-encoding every segment.
    //
    // File paths are passed as separate segments so that "docs/a b.md"
    // becomes ".../docs/a%20b.md" rather than one encoded blob.
    pub fn endpoint<'a, I>(&self, segments: I) -> Result<Url, ApiError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.api_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // Sends a GET with the given Accept header and returns the response if
    // GitHub answered 2xx. Anything else is logged and returned as an error.
    pub async fn get(&self, url: Url, accept: &'static str) -> Result<Response, ApiError> {
        tracing::debug!(%url, accept, "GitHub API request");

        let response = self
            .http
            .get(url.clone())
            .header(ACCEPT, accept)
            .send()
            .await
            .map_err(|source| {
                tracing::error!(%url, error = %source, "GitHub API request failed");
                ApiError::Transport {
                    url: url.to_string(),
                    source,
                }
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Read GitHub's error message, if the body has one
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);

        tracing::error!(
            %url,
            status = status.as_u16(),
            message = message.as_deref().unwrap_or(""),
            "GitHub API returned an error"
        );

        Err(ApiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            message,
        })
    }
}
