use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info, instrument};

use crate::config::GeminiConfig;

/// A request whose answer must match a declared field schema.
///
/// Implementors supply the prompt, the response schema sent to the model,
/// the type the answer decodes into, and the fixed content served when no
/// credential is configured.
pub trait StructuredRequest {
    type Output: DeserializeOwned;

    /// Short name used in logs
    const KIND: &'static str;

    fn prompt(&self) -> String;

    fn response_schema() -> Value;

    fn fallback() -> Self::Output;
}

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("No content in Gemini response")]
    EmptyResponse,

    #[error("Failed to decode structured response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Thin client for the `generateContent` endpoint.
///
/// Every call is a single attempt. Without a credential no request is sent
/// and the request's fallback content is returned instead.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        if !config.has_credential() {
            info!("No generation API key configured; serving fallback feedback content");
        }

        Ok(Self { client, config })
    }

    pub fn has_credential(&self) -> bool {
        self.config.has_credential()
    }

    /// Run one structured generation request.
    ///
    /// Returns the fallback when unconfigured and `None` when the call or the
    /// decoding fails.
    #[instrument(skip(self, request), fields(kind = R::KIND, model = %self.config.model))]
    pub async fn generate<R: StructuredRequest>(&self, request: &R) -> Option<R::Output> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Some(R::fallback());
        };

        match self.try_generate(api_key, request).await {
            Ok(output) => Some(output),
            Err(e) => {
                error!("Error fetching {}: {}", R::KIND, e);
                None
            }
        }
    }

    async fn try_generate<R: StructuredRequest>(
        &self,
        api_key: &str,
        request: &R,
    ) -> Result<R::Output, GenerationError> {
        let body = build_request_body(request.prompt(), R::response_schema());

        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&response_text)
                .map(|envelope| envelope.error.message)
                .unwrap_or(response_text);
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = extract_text(&response_text)?;
        let output = serde_json::from_str(text.trim())?;

        debug!("Successfully decoded Gemini response");
        Ok(output)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

fn build_request_body(prompt: String, response_schema: Value) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part { text: Some(prompt) }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema,
        },
    }
}

/// Text of the first part of the first candidate.
fn extract_text(response_text: &str) -> Result<String, GenerationError> {
    let response: GenerateContentResponse = serde_json::from_str(response_text)?;

    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or(GenerationError::EmptyResponse)
}
