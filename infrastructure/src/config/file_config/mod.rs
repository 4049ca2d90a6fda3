//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod conversion;
mod paths;
mod providers;

pub use conversion::FileConversionConfig;
pub use paths::{FileExportConfig, FileSchemasConfig};
pub use providers::{FileDeepseekConfig, FileProvidersConfig, FileQwenConfig};

use examforge_domain::Model;
use serde::{Deserialize, Serialize};

/// Severity of a configuration issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// One detected configuration problem
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted field path, e.g. "conversion.temperature"
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "[{}] {}: {}", tag, self.field, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Conversion defaults
    pub conversion: FileConversionConfig,
    /// Provider settings (API credentials and endpoints)
    pub providers: FileProvidersConfig,
    /// Export settings
    pub export: FileExportConfig,
    /// Schema store settings
    pub schemas: FileSchemasConfig,
}

impl FileConfig {
    /// Validate the configuration, returning all detected issues.
    ///
    /// Issues are advisory except where marked `Error`; the caller decides
    /// whether to continue.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let model = self.conversion.parse_default_model();
        if matches!(model, Model::Custom(_)) {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                field: "conversion.default_model".to_string(),
                message: format!(
                    "'{}' is not a built-in model; requests will be routed to the first configured provider",
                    self.conversion.default_model
                ),
            });
        }

        if !(0.0..=2.0).contains(&self.conversion.temperature) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                field: "conversion.temperature".to_string(),
                message: format!(
                    "{} is outside the accepted range 0.0..=2.0",
                    self.conversion.temperature
                ),
            });
        }

        if self.export.output_dir.as_os_str().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                field: "export.output_dir".to_string(),
                message: "export directory must not be empty".to_string(),
            });
        }

        if self.schemas.path.as_os_str().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                field: "schemas.path".to_string(),
                message: "schema store path must not be empty".to_string(),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_issues() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_bad_temperature_is_error() {
        let mut config = FileConfig::default();
        config.conversion.temperature = 3.5;
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].field, "conversion.temperature");
    }

    #[test]
    fn test_unknown_model_is_warning() {
        let mut config = FileConfig::default();
        config.conversion.default_model = "gpt-oss".to_string();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = FileConfig::default();
        let raw = toml::to_string(&config).unwrap();
        let parsed: FileConfig = toml::from_str(&raw).unwrap();
        assert_eq!(
            parsed.conversion.default_model,
            config.conversion.default_model
        );
        assert_eq!(parsed.providers.deepseek.api_key_env, "DEEPSEEK_API_KEY");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed: FileConfig = toml::from_str(
            r#"
            [conversion]
            default_model = "qwen-max"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.conversion.parse_default_model(), Model::QwenMax);
        assert_eq!(parsed.conversion.temperature, 0.3);
        assert_eq!(parsed.export.output_dir, std::path::PathBuf::from("exports"));
    }
}
