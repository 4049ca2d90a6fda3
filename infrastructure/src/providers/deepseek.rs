//! DeepSeek adapter (OpenAI-style chat completions API)

use super::{ProviderAdapter, ProviderKind, map_status_error, map_transport_error, preflight_token_check};
use crate::config::FileDeepseekConfig;
use async_trait::async_trait;
use examforge_application::ports::llm_gateway::GatewayError;
use examforge_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Gateway adapter for the DeepSeek chat completions endpoint
pub struct DeepseekGateway {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    temperature: f32,
}

impl DeepseekGateway {
    /// Build from file configuration. Fails when no API key can be resolved.
    pub fn new(config: &FileDeepseekConfig, temperature: f32) -> Result<Self, GatewayError> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            GatewayError::MissingCredential(format!(
                "set {} or [providers.deepseek] api_key",
                config.api_key_env
            ))
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GatewayError::Network(format!("HTTP client init failed: {}", e)))?;

        Ok(Self {
            http,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            temperature,
        })
    }
}

#[async_trait]
impl ProviderAdapter for DeepseekGateway {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Deepseek
    }

    async fn complete(
        &self,
        model: &Model,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GatewayError> {
        preflight_token_check(model, system_prompt, user_prompt)?;

        let body = ChatCompletionRequest {
            model: model.as_str(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: model.token_budget(),
        };

        let url = format!("{}/v1/chat/completions", self.base_url);
        debug!("POST {} (model {})", url, model);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| map_transport_error(ProviderKind::Deepseek, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(ProviderKind::Deepseek, status, body));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| GatewayError::InvalidResponse("response has no choices".to_string()))
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: usize,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}
