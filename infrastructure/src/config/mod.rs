//! Configuration loading and raw file structures

pub mod file_config;
pub mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileConversionConfig, FileDeepseekConfig, FileExportConfig,
    FileProvidersConfig, FileQwenConfig, FileSchemasConfig, Severity,
};
pub use loader::ConfigLoader;
