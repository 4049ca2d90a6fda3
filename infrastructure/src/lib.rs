//! Infrastructure layer for examforge
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod export;
pub mod providers;
pub mod schema_store;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigLoader, FileConfig, Severity};
pub use export::XlsxRecordExporter;
pub use providers::{DeepseekGateway, ProviderAdapter, ProviderKind, QwenGateway, RoutingGateway};
pub use schema_store::JsonSchemaStore;
