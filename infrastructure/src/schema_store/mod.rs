//! JSON-file schema store

mod json_store;

pub use json_store::JsonSchemaStore;
