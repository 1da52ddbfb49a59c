//! GeminiApiClient - [`ContentService`] over the Gemini REST API.
//!
//! Both synthesis stages go through `POST {base}/{model}:generateContent?key=`.
//! The text stage asks for JSON constrained by a response schema; the image
//! stage returns a mix of text and inline-data parts.

use std::time::Duration;

use async_trait::async_trait;
use dossier_core::config::GeminiConfig;
use dossier_core::error::{DossierError, Result};
use dossier_core::synthesis::{ContentPart, ContentService, ImageRequest, TextRequest};
use reqwest::{Client, StatusCode, header::HeaderValue};
use serde::{Deserialize, Serialize};

/// Client that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiApiClient {
    /// Creates a client for the given key and model path prefix
    /// (e.g. `https://generativelanguage.googleapis.com/v1beta/models`).
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Builds a client from `[gemini]`. Fails when no API key is configured.
    pub fn from_config(config: &GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                DossierError::config(
                    "Gemini API key is not set (config [gemini].api_key or GEMINI_API_KEY)",
                )
            })?;
        Ok(Self::new(api_key, config.base_url.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send_request(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = format!("{}/{}:generateContent", self.base_url, model);
        tracing::debug!("[Gemini] POST {}", url);

        let response = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await
            .map_err(|err| {
                let is_retryable = err.is_connect() || err.is_timeout();
                // The request URL carries the API key.
                DossierError::Service {
                    status_code: None,
                    message: format!("Gemini API request failed: {}", err.without_url()),
                    is_retryable,
                    retry_after_secs: None,
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let retry_after = parse_retry_after(response.headers().get("retry-after"));
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            let err = map_http_error(status, body_text, retry_after);
            tracing::warn!("[Gemini] {} returned {}: {}", model, status, err);
            return Err(err);
        }

        response
            .json()
            .await
            .map_err(|err| DossierError::service(format!("Failed to parse Gemini response: {err}")))
    }
}

#[async_trait]
impl ContentService for GeminiApiClient {
    async fn generate_text(&self, request: &TextRequest) -> Result<String> {
        let body = GenerateContentRequest {
            contents: vec![Content::user_text(&request.prompt)],
            generation_config: Some(GenerationConfig {
                temperature: request.temperature,
                response_mime_type: "application/json".to_string(),
                response_schema: request.response_schema.clone(),
            }),
        };

        let response = self.send_request(&request.model, &body).await?;
        extract_text_response(response)
    }

    async fn generate_image(&self, request: &ImageRequest) -> Result<Vec<ContentPart>> {
        let body = GenerateContentRequest {
            contents: vec![Content::user_text(&request.prompt)],
            generation_config: None,
        };

        let response = self.send_request(&request.model, &body).await?;
        Ok(collect_parts(response))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

impl Content {
    fn user_text(text: &str) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    response_mime_type: String,
    response_schema: serde_json::Value,
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
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartResponse {
    text: Option<String>,
    inline_data: Option<InlineDataResponse>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineDataResponse {
    #[serde(default)]
    mime_type: String,
    #[serde(default)]
    data: String,
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

fn first_candidate_parts(response: GenerateContentResponse) -> Vec<PartResponse> {
    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts)
        .unwrap_or_default()
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String> {
    first_candidate_parts(response)
        .into_iter()
        .find_map(|part| part.text.filter(|text| !text.trim().is_empty()))
        .ok_or_else(|| DossierError::service("Gemini API returned no text in the response candidates"))
}

fn collect_parts(response: GenerateContentResponse) -> Vec<ContentPart> {
    first_candidate_parts(response)
        .into_iter()
        .filter_map(|part| match (part.inline_data, part.text) {
            (Some(inline), _) => Some(ContentPart::InlineData {
                mime_type: inline.mime_type,
                data: inline.data,
            }),
            (None, Some(text)) => Some(ContentPart::Text(text)),
            (None, None) => None,
        })
        .collect()
}

fn map_http_error(status: StatusCode, body: String, retry_after: Option<Duration>) -> DossierError {
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

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    DossierError::Service {
        status_code: Some(status.as_u16()),
        message,
        is_retryable,
        retry_after_secs: retry_after.map(|d| d.as_secs()),
    }
}

fn parse_retry_after(header: Option<&HeaderValue>) -> Option<Duration> {
    let value = header?.to_str().ok()?;
    value.trim().parse::<u64>().ok().map(Duration::from_secs)
}
