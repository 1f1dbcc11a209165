pub mod chat;
use std::str::FromStr;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmType {
    Gemini,
    OpenAI,
    Ollama,
}

impl fmt::Display for LlmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LlmType::Gemini => "gemini",
            LlmType::OpenAI => "openai",
            LlmType::Ollama => "ollama",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid LLM type: '{0}'")]
pub struct ParseLlmTypeError(pub String);

impl FromStr for LlmType {
    type Err = ParseLlmTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(LlmType::Gemini),
            "openai" => Ok(LlmType::OpenAI),
            "ollama" => Ok(LlmType::Ollama),
            _ => Err(ParseLlmTypeError(s.to_string())),
        }
    }
}

/// Failures raised by a model provider, either while building the client or during a call.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("{0} API key is required")]
    MissingApiKey(LlmType),

    #[error("Failed to build {provider} client: {message}")]
    Build { provider: LlmType, message: String },

    #[error("{provider} request failed: {message}")]
    Request { provider: LlmType, message: String },
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub llm_type: LlmType,
    pub api_key: Option<String>,
    pub completion_model: String,
    pub base_url: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub timeout_secs: Option<u64>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            llm_type: LlmType::Gemini,
            api_key: None,
            completion_model: "gemini-2.5-flash".to_string(),
            base_url: None,
            max_tokens: None,
            temperature: None,
            timeout_secs: None,
        }
    }
}
