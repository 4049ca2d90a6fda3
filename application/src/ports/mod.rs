//! Port definitions (interfaces to the outside world)

pub mod llm_gateway;
pub mod progress;
pub mod record_exporter;
pub mod schema_store;

pub use llm_gateway::{GatewayError, LlmGateway};
pub use progress::{ConversionProgress, NoProgress};
pub use record_exporter::{ExportError, RecordExporter};
pub use schema_store::{SchemaStore, SchemaStoreError};
