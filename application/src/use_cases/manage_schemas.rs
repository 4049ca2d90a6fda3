//! Manage Schemas use case.
//!
//! CRUD over question-type schemas. Definition validation happens here, on
//! the way in — the store only ever persists schemas that passed
//! [`QuestionSchema::validate`].

use crate::ports::schema_store::{SchemaStore, SchemaStoreError};
use examforge_domain::QuestionSchema;
use std::sync::Arc;
use tracing::info;

/// Use case wrapping schema CRUD with definition validation.
pub struct ManageSchemasUseCase {
    store: Arc<dyn SchemaStore>,
}

impl ManageSchemasUseCase {
    pub fn new(store: Arc<dyn SchemaStore>) -> Self {
        Self { store }
    }

    /// Add a new schema after validating its definition.
    pub fn create(&self, schema: QuestionSchema) -> Result<(), SchemaStoreError> {
        schema.validate()?;
        info!("Creating question type '{}'", schema.id);
        self.store.create(schema)
    }

    /// Replace an existing schema after validating the new definition.
    pub fn update(&self, id: &str, schema: QuestionSchema) -> Result<(), SchemaStoreError> {
        schema.validate()?;
        info!("Updating question type '{}'", id);
        self.store.update(id, schema)
    }

    /// Remove a schema.
    pub fn delete(&self, id: &str) -> Result<(), SchemaStoreError> {
        info!("Deleting question type '{}'", id);
        self.store.delete(id)
    }

    /// Fetch one schema by id.
    pub fn get(&self, id: &str) -> Result<QuestionSchema, SchemaStoreError> {
        self.store.get(id)
    }

    /// All schemas.
    pub fn list(&self) -> Result<Vec<QuestionSchema>, SchemaStoreError> {
        self.store.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use examforge_domain::{FieldDefinition, FieldType};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory store for use-case tests.
    struct MemoryStore {
        schemas: Mutex<HashMap<String, QuestionSchema>>,
    }

    impl MemoryStore {
        fn new() -> Self {
            Self {
                schemas: Mutex::new(HashMap::new()),
            }
        }
    }

    impl SchemaStore for MemoryStore {
        fn create(&self, schema: QuestionSchema) -> Result<(), SchemaStoreError> {
            let mut schemas = self.schemas.lock().unwrap();
            if schemas.contains_key(&schema.id) {
                return Err(SchemaStoreError::AlreadyExists(schema.id));
            }
            schemas.insert(schema.id.clone(), schema);
            Ok(())
        }

        fn update(&self, id: &str, schema: QuestionSchema) -> Result<(), SchemaStoreError> {
            let mut schemas = self.schemas.lock().unwrap();
            if !schemas.contains_key(id) {
                return Err(SchemaStoreError::NotFound(id.to_string()));
            }
            schemas.remove(id);
            schemas.insert(schema.id.clone(), schema);
            Ok(())
        }

        fn delete(&self, id: &str) -> Result<(), SchemaStoreError> {
            self.schemas
                .lock()
                .unwrap()
                .remove(id)
                .map(|_| ())
                .ok_or_else(|| SchemaStoreError::NotFound(id.to_string()))
        }

        fn get(&self, id: &str) -> Result<QuestionSchema, SchemaStoreError> {
            self.schemas
                .lock()
                .unwrap()
                .get(id)
                .cloned()
                .ok_or_else(|| SchemaStoreError::NotFound(id.to_string()))
        }

        fn list(&self) -> Result<Vec<QuestionSchema>, SchemaStoreError> {
            Ok(self.schemas.lock().unwrap().values().cloned().collect())
        }
    }

    fn valid_schema(id: &str) -> QuestionSchema {
        QuestionSchema::new(id, "Test")
            .with_field(FieldDefinition::new("question", FieldType::Text).required())
            .with_prompt_template("{text}")
    }

    #[test]
    fn test_create_then_get() {
        let use_case = ManageSchemasUseCase::new(Arc::new(MemoryStore::new()));
        use_case.create(valid_schema("fill_blank")).unwrap();
        assert_eq!(use_case.get("fill_blank").unwrap().id, "fill_blank");
    }

    #[test]
    fn test_create_rejects_malformed_definition() {
        let use_case = ManageSchemasUseCase::new(Arc::new(MemoryStore::new()));
        let mut schema = valid_schema("bad");
        schema.prompt_template = "no placeholder".into();
        let err = use_case.create(schema).unwrap_err();
        assert!(matches!(err, SchemaStoreError::Invalid(_)));
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let use_case = ManageSchemasUseCase::new(Arc::new(MemoryStore::new()));
        let err = use_case.update("ghost", valid_schema("ghost")).unwrap_err();
        assert!(matches!(err, SchemaStoreError::NotFound(_)));
    }

    #[test]
    fn test_delete_unknown_id_is_not_found() {
        let use_case = ManageSchemasUseCase::new(Arc::new(MemoryStore::new()));
        let err = use_case.delete("ghost").unwrap_err();
        assert!(matches!(err, SchemaStoreError::NotFound(_)));
    }

    #[test]
    fn test_duplicate_create_rejected() {
        let use_case = ManageSchemasUseCase::new(Arc::new(MemoryStore::new()));
        use_case.create(valid_schema("dup")).unwrap();
        let err = use_case.create(valid_schema("dup")).unwrap_err();
        assert!(matches!(err, SchemaStoreError::AlreadyExists(_)));
    }
}
