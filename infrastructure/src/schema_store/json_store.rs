//! File-backed schema store
//!
//! Schemas live in one JSON document (an array, preserving creation order).
//! The store is read-mostly and edited by a single operator, so the only
//! write discipline needed is atomic replacement: every mutation writes a
//! sibling temp file and renames it over the original.

use examforge_application::ports::schema_store::{SchemaStore, SchemaStoreError};
use examforge_domain::{QuestionSchema, default_schemas};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};

/// Schema store persisting to a single JSON file
pub struct JsonSchemaStore {
    path: PathBuf,
    schemas: Mutex<Vec<QuestionSchema>>,
}

impl JsonSchemaStore {
    /// Open the store at `path`, seeding the built-in schemas when the
    /// file does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SchemaStoreError> {
        let path = path.as_ref().to_path_buf();

        let schemas = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .map_err(|e| SchemaStoreError::Storage(format!("read {}: {}", path.display(), e)))?;
            serde_json::from_str(&raw).map_err(|e| {
                SchemaStoreError::Storage(format!("parse {}: {}", path.display(), e))
            })?
        } else {
            info!(
                "No schema file at {}, seeding built-in question types",
                path.display()
            );
            let defaults = default_schemas();
            write_atomically(&path, &defaults)?;
            defaults
        };

        debug!("Loaded {} question type(s) from {}", schemas.len(), path.display());

        Ok(Self {
            path,
            schemas: Mutex::new(schemas),
        })
    }

    fn persist(&self, schemas: &[QuestionSchema]) -> Result<(), SchemaStoreError> {
        write_atomically(&self.path, schemas)
    }
}

fn write_atomically(path: &Path, schemas: &[QuestionSchema]) -> Result<(), SchemaStoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| SchemaStoreError::Storage(format!("create {}: {}", parent.display(), e)))?;
    }

    let raw = serde_json::to_string_pretty(schemas)
        .map_err(|e| SchemaStoreError::Storage(e.to_string()))?;

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, raw)
        .map_err(|e| SchemaStoreError::Storage(format!("write {}: {}", tmp.display(), e)))?;
    std::fs::rename(&tmp, path)
        .map_err(|e| SchemaStoreError::Storage(format!("replace {}: {}", path.display(), e)))?;
    Ok(())
}

impl SchemaStore for JsonSchemaStore {
    fn create(&self, schema: QuestionSchema) -> Result<(), SchemaStoreError> {
        let mut schemas = self.schemas.lock().unwrap();
        if schemas.iter().any(|s| s.id == schema.id) {
            return Err(SchemaStoreError::AlreadyExists(schema.id));
        }
        schemas.push(schema);
        self.persist(&schemas)
    }

    fn update(&self, id: &str, schema: QuestionSchema) -> Result<(), SchemaStoreError> {
        let mut schemas = self.schemas.lock().unwrap();
        // A rename must not collide with another stored schema
        if schema.id != id && schemas.iter().any(|s| s.id == schema.id) {
            return Err(SchemaStoreError::AlreadyExists(schema.id));
        }
        let slot = schemas
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| SchemaStoreError::NotFound(id.to_string()))?;
        *slot = schema;
        self.persist(&schemas)
    }

    fn delete(&self, id: &str) -> Result<(), SchemaStoreError> {
        let mut schemas = self.schemas.lock().unwrap();
        let before = schemas.len();
        schemas.retain(|s| s.id != id);
        if schemas.len() == before {
            return Err(SchemaStoreError::NotFound(id.to_string()));
        }
        self.persist(&schemas)
    }

    fn get(&self, id: &str) -> Result<QuestionSchema, SchemaStoreError> {
        self.schemas
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| SchemaStoreError::NotFound(id.to_string()))
    }

    fn list(&self) -> Result<Vec<QuestionSchema>, SchemaStoreError> {
        Ok(self.schemas.lock().unwrap().clone())
    }
}
