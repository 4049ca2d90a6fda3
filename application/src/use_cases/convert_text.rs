//! Convert Text use case.
//!
//! The core flow: look up the question-type schema, build the prompt, send
//! it to the selected model, validate the response against the schema, and
//! hand back the structured records. Strictly sequential — the caller blocks
//! on the network call. Nothing is retried automatically; a failed
//! conversion surfaces to the operator, who may re-submit with a different
//! model or an edited schema.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::ConversionProgress;
use crate::ports::schema_store::{SchemaStore, SchemaStoreError};
use examforge_domain::{
    Model, PromptTemplate, QuestionSchema, StructuredRecord, ValidationFailure, estimate_tokens,
    truncate_str, validate_response,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during a conversion.
#[derive(Error, Debug)]
pub enum ConvertTextError {
    #[error("Question text is empty")]
    EmptyText,

    #[error(transparent)]
    SchemaStore(#[from] SchemaStoreError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Validation(#[from] ValidationFailure),
}

/// Input for the [`ConvertTextUseCase`].
#[derive(Debug, Clone)]
pub struct ConvertTextInput {
    /// Raw question text pasted by the operator.
    pub raw_text: String,
    /// Id of the question-type schema to convert against.
    pub schema_id: String,
    /// Model that performs the conversion.
    pub model: Model,
}

impl ConvertTextInput {
    pub fn new(raw_text: impl Into<String>, schema_id: impl Into<String>, model: Model) -> Self {
        Self {
            raw_text: raw_text.into(),
            schema_id: schema_id.into(),
            model,
        }
    }
}

/// Output of a successful conversion.
#[derive(Debug)]
pub struct ConvertTextOutput {
    /// Validated records, one per question found in the text.
    pub records: Vec<StructuredRecord>,
    /// The schema the records conform to (needed for export).
    pub schema: QuestionSchema,
    /// Raw response text from the backend, kept for display.
    pub raw_response: String,
}

/// Use case for converting raw question text into structured records.
pub struct ConvertTextUseCase {
    gateway: Arc<dyn LlmGateway>,
    schema_store: Arc<dyn SchemaStore>,
}

impl ConvertTextUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, schema_store: Arc<dyn SchemaStore>) -> Self {
        Self {
            gateway,
            schema_store,
        }
    }

    /// Execute the conversion with progress callbacks.
    pub async fn execute(
        &self,
        input: ConvertTextInput,
        progress: &dyn ConversionProgress,
    ) -> Result<ConvertTextOutput, ConvertTextError> {
        if input.raw_text.trim().is_empty() {
            return Err(ConvertTextError::EmptyText);
        }

        info!(
            "Converting text with schema '{}' and model {}: {}",
            input.schema_id,
            input.model,
            truncate_str(&input.raw_text, 80)
        );

        let schema = self.schema_store.get(&input.schema_id)?;

        let prompt = PromptTemplate::build(&schema, &input.raw_text);
        let estimated = estimate_tokens(&prompt);
        debug!("Prompt built: {} chars, ~{} tokens", prompt.len(), estimated);
        progress.on_prompt_built(estimated);

        progress.on_request_started(&input.model);
        let raw_response = self
            .gateway
            .complete(&input.model, PromptTemplate::system(), &prompt)
            .await?;
        progress.on_response_received(raw_response.len());

        let records = validate_response(&raw_response, &schema)?;
        progress.on_records_validated(records.len());

        info!(
            "Conversion produced {} record(s) for schema '{}'",
            records.len(),
            schema.id
        );

        Ok(ConvertTextOutput {
            records,
            schema,
            raw_response,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use examforge_domain::{FieldDefinition, FieldType};
    use serde_json::json;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockGateway {
        response: Mutex<Option<Result<String, GatewayError>>>,
        last_prompt: Mutex<Option<String>>,
    }

    impl MockGateway {
        fn replying(text: &str) -> Self {
            Self {
                response: Mutex::new(Some(Ok(text.to_string()))),
                last_prompt: Mutex::new(None),
            }
        }

        fn failing(error: GatewayError) -> Self {
            Self {
                response: Mutex::new(Some(Err(error))),
                last_prompt: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn complete(
            &self,
            _model: &Model,
            _system_prompt: &str,
            user_prompt: &str,
        ) -> Result<String, GatewayError> {
            *self.last_prompt.lock().unwrap() = Some(user_prompt.to_string());
            self.response
                .lock()
                .unwrap()
                .take()
                .expect("gateway called twice")
        }

        fn available_models(&self) -> Vec<Model> {
            Model::all()
        }
    }

    struct MockStore {
        schema: QuestionSchema,
    }

    impl SchemaStore for MockStore {
        fn create(&self, _schema: QuestionSchema) -> Result<(), SchemaStoreError> {
            unimplemented!()
        }

        fn update(&self, _id: &str, _schema: QuestionSchema) -> Result<(), SchemaStoreError> {
            unimplemented!()
        }

        fn delete(&self, _id: &str) -> Result<(), SchemaStoreError> {
            unimplemented!()
        }

        fn get(&self, id: &str) -> Result<QuestionSchema, SchemaStoreError> {
            if id == self.schema.id {
                Ok(self.schema.clone())
            } else {
                Err(SchemaStoreError::NotFound(id.to_string()))
            }
        }

        fn list(&self) -> Result<Vec<QuestionSchema>, SchemaStoreError> {
            Ok(vec![self.schema.clone()])
        }
    }

    fn test_schema() -> QuestionSchema {
        QuestionSchema::new("single_choice", "Single choice")
            .with_field(FieldDefinition::new("question", FieldType::Text).required())
            .with_field(FieldDefinition::new("options", FieldType::TextList))
            .with_field(FieldDefinition::new("answer", FieldType::Text).required())
            .with_prompt_template("Convert: {text}")
    }

    fn use_case(gateway: MockGateway) -> ConvertTextUseCase {
        ConvertTextUseCase::new(
            Arc::new(gateway),
            Arc::new(MockStore {
                schema: test_schema(),
            }),
        )
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_successful_conversion() {
        let gateway =
            MockGateway::replying(r#"{"question":"2+2=?","options":["3","4","5"],"answer":"4"}"#);
        let use_case = use_case(gateway);

        let input = ConvertTextInput::new("2+2=?\nA. 3\nB. 4\nC. 5", "single_choice", Model::QwenPlus);
        let output = use_case.execute(input, &NoProgress).await.unwrap();

        assert_eq!(output.records.len(), 1);
        assert_eq!(output.records[0].get("answer"), Some(&json!("4")));
        assert_eq!(output.schema.id, "single_choice");
    }

    #[tokio::test]
    async fn test_prompt_contains_template_and_raw_text() {
        let gateway = MockGateway::replying(r#"{"question":"Q","answer":"A"}"#);
        let prompt_probe = Arc::new(gateway);
        let use_case = ConvertTextUseCase::new(
            prompt_probe.clone(),
            Arc::new(MockStore {
                schema: test_schema(),
            }),
        );

        let input = ConvertTextInput::new("raw exam text", "single_choice", Model::default());
        use_case.execute(input, &NoProgress).await.unwrap();

        let prompt = prompt_probe.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("Convert:"));
        assert!(prompt.contains("raw exam text"));
    }

    #[tokio::test]
    async fn test_unknown_schema_fails_before_network() {
        let gateway = MockGateway::replying("should never be used");
        let use_case = use_case(gateway);

        let input = ConvertTextInput::new("text", "no_such_schema", Model::default());
        let err = use_case.execute(input, &NoProgress).await.unwrap_err();

        assert!(matches!(
            err,
            ConvertTextError::SchemaStore(SchemaStoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_text_rejected() {
        let use_case = use_case(MockGateway::replying("unused"));
        let input = ConvertTextInput::new("   \n  ", "single_choice", Model::default());
        let err = use_case.execute(input, &NoProgress).await.unwrap_err();
        assert!(matches!(err, ConvertTextError::EmptyText));
    }

    #[tokio::test]
    async fn test_missing_required_field_surfaces_mismatch() {
        let gateway = MockGateway::replying(r#"{"question":"2+2=?","options":["3","4"]}"#);
        let use_case = use_case(gateway);

        let input = ConvertTextInput::new("2+2=?", "single_choice", Model::default());
        let err = use_case.execute(input, &NoProgress).await.unwrap_err();

        let ConvertTextError::Validation(failure) = err else {
            panic!("expected validation failure");
        };
        assert_eq!(failure.missing_fields(), vec!["answer"]);
    }

    #[tokio::test]
    async fn test_gateway_error_propagates() {
        let gateway = MockGateway::failing(GatewayError::TokenLimitExceeded {
            model: Model::QwenTurbo,
            estimated: 2500,
            budget: 2000,
        });
        let use_case = use_case(gateway);

        let input = ConvertTextInput::new("very long text", "single_choice", Model::QwenTurbo);
        let err = use_case.execute(input, &NoProgress).await.unwrap_err();

        assert!(matches!(
            err,
            ConvertTextError::Gateway(GatewayError::TokenLimitExceeded { budget: 2000, .. })
        ));
    }
}
