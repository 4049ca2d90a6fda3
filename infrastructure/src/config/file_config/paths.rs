//! Output and storage paths from TOML (`[export]` and `[schemas]` sections)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExportConfig {
    /// Directory export files are written into, created on demand.
    pub output_dir: PathBuf,
}

impl Default for FileExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("exports"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSchemasConfig {
    /// JSON document holding the question-type schemas.
    pub path: PathBuf,
}

impl Default for FileSchemasConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("schemas.json"),
        }
    }
}
