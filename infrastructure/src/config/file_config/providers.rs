//! Provider configuration from TOML (`[providers]` section)

use serde::{Deserialize, Serialize};

/// DeepSeek API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDeepseekConfig {
    /// Environment variable name for the API key (default: "DEEPSEEK_API_KEY").
    pub api_key_env: String,
    /// Direct API key. Takes priority over the env var when set.
    pub api_key: Option<String>,
    /// Base URL for the DeepSeek API.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileDeepseekConfig {
    fn default() -> Self {
        Self {
            api_key_env: "DEEPSEEK_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.deepseek.com".to_string(),
            timeout_secs: 30,
        }
    }
}

impl FileDeepseekConfig {
    /// Resolve the API key: inline value wins, then the configured env var.
    pub fn resolve_api_key(&self) -> Option<String> {
        resolve_key(self.api_key.as_deref(), &self.api_key_env)
    }
}

/// Qwen (DashScope) API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQwenConfig {
    /// Environment variable name for the API key (default: "DASHSCOPE_API_KEY").
    pub api_key_env: String,
    /// Direct API key. Takes priority over the env var when set.
    pub api_key: Option<String>,
    /// Base URL for the DashScope API.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileQwenConfig {
    fn default() -> Self {
        Self {
            api_key_env: "DASHSCOPE_API_KEY".to_string(),
            api_key: None,
            base_url: "https://dashscope.aliyuncs.com".to_string(),
            timeout_secs: 30,
        }
    }
}

impl FileQwenConfig {
    /// Resolve the API key: inline value wins, then the configured env var.
    pub fn resolve_api_key(&self) -> Option<String> {
        resolve_key(self.api_key.as_deref(), &self.api_key_env)
    }
}

fn resolve_key(inline: Option<&str>, env_name: &str) -> Option<String> {
    if let Some(key) = inline
        && !key.trim().is_empty()
    {
        return Some(key.to_string());
    }
    std::env::var(env_name)
        .ok()
        .filter(|k| !k.trim().is_empty())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// DeepSeek API settings.
    pub deepseek: FileDeepseekConfig,
    /// Qwen (DashScope) API settings.
    pub qwen: FileQwenConfig,
}
