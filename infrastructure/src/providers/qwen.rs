//! Qwen adapter (DashScope text-generation API)

use super::{ProviderAdapter, ProviderKind, map_status_error, map_transport_error, preflight_token_check};
use crate::config::FileQwenConfig;
use async_trait::async_trait;
use examforge_application::ports::llm_gateway::GatewayError;
use examforge_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Gateway adapter for the DashScope text-generation endpoint
///
/// Same contract as [`DeepseekGateway`](super::DeepseekGateway) but the
/// DashScope wire format nests messages under `input` and sampling
/// parameters under `parameters`, and returns the text under `output`.
pub struct QwenGateway {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    temperature: f32,
}

impl QwenGateway {
    pub fn new(config: &FileQwenConfig, temperature: f32) -> Result<Self, GatewayError> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            GatewayError::MissingCredential(format!(
                "set {} or [providers.qwen] api_key",
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
impl ProviderAdapter for QwenGateway {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Qwen
    }

    async fn complete(
        &self,
        model: &Model,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GatewayError> {
        preflight_token_check(model, system_prompt, user_prompt)?;

        let body = GenerationRequest {
            model: model.as_str(),
            input: GenerationInput {
                messages: vec![
                    GenerationMessage {
                        role: "system",
                        content: system_prompt,
                    },
                    GenerationMessage {
                        role: "user",
                        content: user_prompt,
                    },
                ],
            },
            parameters: GenerationParameters {
                temperature: self.temperature,
                max_tokens: model.token_budget(),
            },
        };

        let url = format!(
            "{}/api/v1/services/aigc/text-generation/generation",
            self.base_url
        );
        debug!("POST {} (model {})", url, model);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| map_transport_error(ProviderKind::Qwen, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(ProviderKind::Qwen, status, body));
        }

        let parsed: GenerationResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        match parsed.output {
            Some(output) if !output.text.is_empty() => Ok(output.text),
            _ => Err(GatewayError::InvalidResponse(
                "response has no output text".to_string(),
            )),
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    input: GenerationInput<'a>,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationInput<'a> {
    messages: Vec<GenerationMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct GenerationMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    temperature: f32,
    max_tokens: usize,
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    output: Option<GenerationOutput>,
}

#[derive(Debug, Deserialize)]
struct GenerationOutput {
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let body = GenerationRequest {
            model: "qwen-turbo",
            input: GenerationInput {
                messages: vec![GenerationMessage {
                    role: "user",
                    content: "convert this",
                }],
            },
            parameters: GenerationParameters {
                temperature: 0.5,
                max_tokens: 2000,
            },
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "qwen-turbo",
                "input": {
                    "messages": [{"role": "user", "content": "convert this"}]
                },
                "parameters": {"temperature": 0.5, "max_tokens": 2000}
            })
        );
    }

    #[test]
    fn test_response_parsing() {
        let raw = json!({
            "output": {"text": "[{\"answer\": true}]", "finish_reason": "stop"},
            "request_id": "abc"
        });
        let parsed: GenerationResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.output.unwrap().text, "[{\"answer\": true}]");
    }

    #[tokio::test]
    async fn test_qwen_turbo_budget_enforced_before_network() {
        let config = FileQwenConfig {
            api_key: Some("sk-test".to_string()),
            base_url: "http://127.0.0.1:1".to_string(),
            ..Default::default()
        };
        let gateway = QwenGateway::new(&config, 0.3).unwrap();
        // ~2250 estimated tokens against qwen-turbo's 2000 budget
        let prompt = "x".repeat(9000);
        let err = gateway
            .complete(&Model::QwenTurbo, "", &prompt)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GatewayError::TokenLimitExceeded { budget: 2000, .. }
        ));
    }
}
