//! Conversion defaults from TOML (`[conversion]` section)

use examforge_domain::Model;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConversionConfig {
    /// Model used when `--model` is not given.
    pub default_model: String,
    /// Schema used when `--schema` is not given.
    pub default_schema: Option<String>,
    /// Sampling temperature sent with every request.
    pub temperature: f32,
}

impl Default for FileConversionConfig {
    fn default() -> Self {
        Self {
            default_model: Model::default().to_string(),
            default_schema: None,
            temperature: 0.3,
        }
    }
}

impl FileConversionConfig {
    /// Parse the configured default model.
    pub fn parse_default_model(&self) -> Model {
        self.default_model.parse().unwrap_or_default()
    }
}
