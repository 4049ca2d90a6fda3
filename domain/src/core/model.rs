//! Model value object representing an AI backend model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available AI models (Value Object)
///
/// This is a domain concept representing the different backend models
/// that can perform a question conversion. Two provider families exist:
/// DeepSeek (OpenAI-style chat completions) and Qwen (DashScope).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // DeepSeek models
    DeepseekChat,
    DeepseekCoder,
    // Qwen models
    QwenTurbo,
    QwenPlus,
    QwenMax,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::DeepseekChat => "deepseek-chat",
            Model::DeepseekCoder => "deepseek-coder",
            Model::QwenTurbo => "qwen-turbo",
            Model::QwenPlus => "qwen-plus",
            Model::QwenMax => "qwen-max",
            Model::Custom(s) => s,
        }
    }

    /// All built-in models, in display order
    pub fn all() -> Vec<Model> {
        vec![
            Model::DeepseekChat,
            Model::DeepseekCoder,
            Model::QwenTurbo,
            Model::QwenPlus,
            Model::QwenMax,
        ]
    }

    /// Check if this is a DeepSeek model
    pub fn is_deepseek(&self) -> bool {
        matches!(self, Model::DeepseekChat | Model::DeepseekCoder)
    }

    /// Check if this is a Qwen model
    pub fn is_qwen(&self) -> bool {
        matches!(self, Model::QwenTurbo | Model::QwenPlus | Model::QwenMax)
    }

    /// Token budget for the combined prompt and response.
    ///
    /// Requests whose estimated prompt size exceeds this ceiling are
    /// rejected before any network call is issued.
    pub fn token_budget(&self) -> usize {
        match self {
            Model::DeepseekChat | Model::DeepseekCoder => 4000,
            Model::QwenTurbo => 2000,
            Model::QwenPlus => 4000,
            Model::QwenMax => 6000,
            Model::Custom(_) => 4000,
        }
    }

    /// Short human-readable description, shown by the `models` command
    pub fn description(&self) -> &'static str {
        match self {
            Model::DeepseekChat => "General-purpose conversion, good default",
            Model::DeepseekCoder => "Tuned for code-heavy question text",
            Model::QwenTurbo => "Fastest response, short and simple questions",
            Model::QwenPlus => "Balanced speed and quality",
            Model::QwenMax => "Highest quality, long or complex questions",
            Model::Custom(_) => "User-specified model",
        }
    }
}

impl Default for Model {
    /// Returns the default model (deepseek-chat)
    fn default() -> Self {
        Model::DeepseekChat
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "deepseek-chat" => Model::DeepseekChat,
            "deepseek-coder" => Model::DeepseekCoder,
            "qwen-turbo" => Model::QwenTurbo,
            "qwen-plus" => Model::QwenPlus,
            "qwen-max" => Model::QwenMax,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in Model::all() {
            let s = model.to_string();
            let parsed: Model = s.parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "qwen-long".parse().unwrap();
        assert_eq!(model, Model::Custom("qwen-long".to_string()));
        assert_eq!(model.to_string(), "qwen-long");
    }

    #[test]
    fn test_model_family_detection() {
        assert!(Model::DeepseekChat.is_deepseek());
        assert!(Model::QwenTurbo.is_qwen());
        assert!(!Model::QwenTurbo.is_deepseek());
        assert!(!Model::Custom("x".into()).is_qwen());
    }

    #[test]
    fn test_token_budgets() {
        assert_eq!(Model::QwenTurbo.token_budget(), 2000);
        assert_eq!(Model::QwenMax.token_budget(), 6000);
        assert_eq!(Model::DeepseekChat.token_budget(), 4000);
    }

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default(), Model::DeepseekChat);
    }
}
