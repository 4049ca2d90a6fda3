//! LLM Gateway port
//!
//! Defines the interface for communicating with AI backends.

use async_trait::async_trait;
use examforge_domain::Model;
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication failed for {provider}: {message}")]
    Auth { provider: String, message: String },

    #[error("Rate limited by {0}; retry later or pick another model")]
    RateLimit(String),

    #[error(
        "Prompt is too large for {model}: estimated {estimated} tokens, budget {budget}"
    )]
    TokenLimitExceeded {
        model: Model,
        estimated: usize,
        budget: usize,
    },

    #[error("Request timed out")]
    Timeout,

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Unexpected response shape: {0}")]
    InvalidResponse(String),

    #[error("Missing API key: {0}")]
    MissingCredential(String),
}

/// Gateway for AI backend communication
///
/// This port defines how the application layer talks to AI providers.
/// Implementations (adapters) live in the infrastructure layer. One call,
/// one completion — no sessions, no retries; retry is always an explicit
/// operator re-submission.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send a prompt to the given model and return the raw response text.
    ///
    /// Implementations must reject prompts whose estimated token count
    /// exceeds the model's budget before issuing any network request.
    async fn complete(
        &self,
        model: &Model,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GatewayError>;

    /// Models this gateway can route requests to
    fn available_models(&self) -> Vec<Model>;
}
