//! AI provider adapters
//!
//! Each provider family gets one adapter speaking its wire format; the
//! [`RoutingGateway`] picks the adapter for a model and presents them to
//! the application layer as a single [`LlmGateway`].

mod deepseek;
mod qwen;
mod routing;

pub use deepseek::DeepseekGateway;
pub use qwen::QwenGateway;
pub use routing::RoutingGateway;

use async_trait::async_trait;
use examforge_application::ports::llm_gateway::GatewayError;
use examforge_domain::{Model, estimate_tokens};

/// Provider family an adapter speaks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Deepseek,
    Qwen,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Deepseek => write!(f, "deepseek"),
            ProviderKind::Qwen => write!(f, "qwen"),
        }
    }
}

/// One provider family's HTTP adapter
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn kind(&self) -> ProviderKind;

    async fn complete(
        &self,
        model: &Model,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GatewayError>;
}

/// Reject a prompt that cannot fit the model's token budget.
///
/// Runs before any network request so an oversized prompt never produces
/// traffic. The estimate is a character heuristic, see
/// [`examforge_domain::estimate_tokens`].
pub(crate) fn preflight_token_check(
    model: &Model,
    system_prompt: &str,
    user_prompt: &str,
) -> Result<(), GatewayError> {
    let estimated = estimate_tokens(system_prompt) + estimate_tokens(user_prompt);
    let budget = model.token_budget();
    if estimated > budget {
        return Err(GatewayError::TokenLimitExceeded {
            model: model.clone(),
            estimated,
            budget,
        });
    }
    Ok(())
}

/// Map a transport failure to a gateway error.
pub(crate) fn map_transport_error(provider: ProviderKind, error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Network(format!("{} request failed: {}", provider, error))
    }
}

/// Map a non-success HTTP status to a gateway error.
pub(crate) fn map_status_error(
    provider: ProviderKind,
    status: reqwest::StatusCode,
    body: String,
) -> GatewayError {
    match status.as_u16() {
        401 | 403 => GatewayError::Auth {
            provider: provider.to_string(),
            message: "API key rejected".to_string(),
        },
        429 => GatewayError::RateLimit(provider.to_string()),
        _ => GatewayError::Network(format!(
            "{} returned HTTP {}: {}",
            provider,
            status.as_u16(),
            examforge_domain::truncate_str(&body, 200)
        )),
    }
}
