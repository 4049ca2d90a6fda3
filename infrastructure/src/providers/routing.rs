//! Routes each request to the adapter for the model's provider family

use super::{ProviderAdapter, ProviderKind};
use async_trait::async_trait;
use examforge_application::ports::llm_gateway::{GatewayError, LlmGateway};
use examforge_domain::Model;
use std::sync::Arc;

/// Gateway that fans requests out to the configured provider adapters.
///
/// Routing priority:
///  1. Model family (deepseek-* to the DeepSeek adapter, qwen-* to Qwen)
///  2. Custom models go to the first configured adapter
///  3. No adapters at all is `GatewayError::ModelNotAvailable`
pub struct RoutingGateway {
    providers: Vec<Arc<dyn ProviderAdapter>>,
}

impl RoutingGateway {
    pub fn new(providers: Vec<Arc<dyn ProviderAdapter>>) -> Self {
        Self { providers }
    }

    fn resolve_provider(&self, model: &Model) -> Result<&dyn ProviderAdapter, GatewayError> {
        let inferred_kind = if model.is_deepseek() {
            Some(ProviderKind::Deepseek)
        } else if model.is_qwen() {
            Some(ProviderKind::Qwen)
        } else {
            None
        };

        if let Some(kind) = inferred_kind {
            return self
                .providers
                .iter()
                .find(|p| p.kind() == kind)
                .map(|p| p.as_ref())
                .ok_or_else(|| {
                    GatewayError::ModelNotAvailable(format!(
                        "{} requires the {} provider, which is not configured",
                        model, kind
                    ))
                });
        }

        // Custom model: first configured adapter
        self.providers
            .first()
            .map(|p| p.as_ref())
            .ok_or_else(|| GatewayError::ModelNotAvailable("no providers configured".to_string()))
    }
}

#[async_trait]
impl LlmGateway for RoutingGateway {
    async fn complete(
        &self,
        model: &Model,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GatewayError> {
        self.resolve_provider(model)?
            .complete(model, system_prompt, user_prompt)
            .await
    }

    fn available_models(&self) -> Vec<Model> {
        Model::all()
            .into_iter()
            .filter(|m| self.resolve_provider(m).is_ok())
            .collect()
    }
}
