// ABOUTME: Anthropic LLM provider implementation for workout plan generation
// ABOUTME: Uses the Messages API with system instructions and typed request/response structs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Anthropic Provider
//!
//! Implementation of the `LlmProvider` trait for Anthropic's Messages API.
//!
//! ## Configuration
//!
//! Set the `ANTHROPIC_API_KEY` environment variable with your API key from
//! the Anthropic Console: <https://console.anthropic.com/>

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, warn};

use super::{
    ChatMessage, ChatRequest, ChatResponse, LlmCapabilities, LlmProvider, MessageRole, TokenUsage,
};
use crate::constants::env_config;
use crate::errors::AppError;
use crate::utils::http_client::shared_client;

/// Environment variable for the Anthropic API key
const ANTHROPIC_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// API version header value required by the Messages API
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Default model to use
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Available Anthropic models
const AVAILABLE_MODELS: &[&str] = &[
    "claude-sonnet-4-20250514",
    "claude-3-7-sonnet-20250219",
    "claude-3-5-haiku-20241022",
];

/// Default token budget when the request does not specify one
const DEFAULT_MAX_TOKENS: u32 = 2048;

// ============================================================================
// API Request/Response Types (Messages API format)
// ============================================================================

/// Anthropic Messages API request structure
#[derive(Debug, Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<AnthropicMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// Message structure for the Messages API
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

/// Anthropic Messages API response structure
#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<AnthropicContentBlock>,
    model: String,
    #[serde(default)]
    stop_reason: Option<String>,
    #[serde(default)]
    usage: Option<AnthropicUsage>,
}

/// One content block in the response
#[derive(Debug, Deserialize)]
struct AnthropicContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: Option<String>,
}

/// Usage statistics in the response
#[derive(Debug, Deserialize)]
struct AnthropicUsage {
    input_tokens: u32,
    output_tokens: u32,
}

/// Anthropic API error response
#[derive(Debug, Deserialize)]
struct AnthropicErrorResponse {
    error: AnthropicErrorDetail,
}

/// Error detail structure
#[derive(Debug, Deserialize)]
struct AnthropicErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Anthropic LLM provider using the Messages API
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider with the given API key
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self {
            client: shared_client().clone(),
            api_key,
            base_url: env_config::anthropic_api_base(),
        }
    }

    /// Create an Anthropic provider from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `ANTHROPIC_API_KEY` is not set
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = std::env::var(ANTHROPIC_API_KEY_ENV).map_err(|_| {
            AppError::config(format!(
                "Missing {ANTHROPIC_API_KEY_ENV} environment variable. Please set it in the .env file."
            ))
        })?;

        Ok(Self::new(api_key))
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.base_url)
    }

    /// Split internal messages into the system instruction and the
    /// conversation turns the Messages API expects
    fn convert_messages(messages: &[ChatMessage]) -> (Option<String>, Vec<AnthropicMessage>) {
        let mut system = None;
        let mut turns = Vec::with_capacity(messages.len());

        for msg in messages {
            match msg.role {
                MessageRole::System => {
                    // The Messages API takes the system instruction as a
                    // top-level field, not a conversation turn
                    system = Some(msg.content.clone());
                }
                MessageRole::User | MessageRole::Assistant => {
                    turns.push(AnthropicMessage {
                        role: msg.role.as_str().to_owned(),
                        content: msg.content.clone(),
                    });
                }
            }
        }

        (system, turns)
    }

    /// Parse an error response from the Anthropic API
    fn parse_error_response(status: reqwest::StatusCode, body: &str) -> AppError {
        if let Ok(error_response) = serde_json::from_str::<AnthropicErrorResponse>(body) {
            let error_type = error_response
                .error
                .error_type
                .unwrap_or_else(|| "unknown".to_owned());

            match status.as_u16() {
                401 => AppError::config(format!(
                    "Anthropic API authentication failed: {}",
                    error_response.error.message
                )),
                429 => AppError::external_service(
                    "Anthropic",
                    format!("Rate limit exceeded: {}", error_response.error.message),
                ),
                400 => AppError::invalid_input(format!(
                    "Anthropic API validation error: {}",
                    error_response.error.message
                )),
                _ => AppError::external_service(
                    "Anthropic",
                    format!("{} - {}", error_type, error_response.error.message),
                ),
            }
        } else {
            AppError::external_service(
                "Anthropic",
                format!(
                    "API error ({}): {}",
                    status,
                    body.chars().take(200).collect::<String>()
                ),
            )
        }
    }
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    fn display_name(&self) -> &'static str {
        "Anthropic (Claude)"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::SYSTEM_MESSAGES | LlmCapabilities::JSON_MODE | LlmCapabilities::VISION
    }

    fn default_model(&self) -> &'static str {
        DEFAULT_MODEL
    }

    fn available_models(&self) -> &'static [&'static str] {
        AVAILABLE_MODELS
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(DEFAULT_MODEL)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request.model.as_deref().unwrap_or(DEFAULT_MODEL);

        debug!("Sending chat completion request to Anthropic");

        let (system, messages) = Self::convert_messages(&request.messages);

        let api_request = AnthropicRequest {
            model: model.to_owned(),
            max_tokens: request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            messages,
            system,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(self.api_url("v1/messages"))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&api_request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to Anthropic API: {}", e);
                AppError::external_service("Anthropic", format!("Failed to connect: {e}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read Anthropic API response: {}", e);
            AppError::external_service("Anthropic", format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &body));
        }

        let api_response: AnthropicResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse Anthropic API response: {}", e);
            AppError::external_service("Anthropic", format!("Failed to parse response: {e}"))
        })?;

        // First text segment of the response is the completion
        let content = api_response
            .content
            .iter()
            .find(|block| block.block_type == "text")
            .and_then(|block| block.text.clone())
            .ok_or_else(|| {
                AppError::external_service("Anthropic", "API returned no text content")
            })?;

        debug!(
            "Received response from Anthropic: {} chars, stop_reason: {:?}",
            content.len(),
            api_response.stop_reason
        );

        Ok(ChatResponse {
            content,
            model: api_response.model,
            usage: api_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.input_tokens,
                completion_tokens: u.output_tokens,
                total_tokens: u.input_tokens + u.output_tokens,
            }),
            finish_reason: api_response.stop_reason,
        })
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool, AppError> {
        debug!("Performing Anthropic API health check");

        // The models endpoint is a lightweight authenticated probe
        let response = self
            .client
            .get(self.api_url("v1/models"))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .send()
            .await
            .map_err(|e| {
                error!("Anthropic health check failed: {}", e);
                AppError::external_service("Anthropic", format!("Health check failed: {e}"))
            })?;

        let healthy = response.status().is_success();

        if healthy {
            debug!("Anthropic API health check passed");
        } else {
            warn!(
                "Anthropic API health check failed with status: {}",
                response.status()
            );
        }

        Ok(healthy)
    }
}
