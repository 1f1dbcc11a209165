pub mod gemini;
pub mod ollama;
pub mod openai;

use async_trait::async_trait;
use std::sync::Arc;
use super::{ LlmConfig, LlmError, LlmType };
use self::gemini::GeminiChatClient;
use self::ollama::OllamaClient;
use self::openai::OpenAIChatClient;
use rllm::{
    builder::{ LLMBackend, LLMBuilder },
    chat::{ ChatMessage, ChatRole, MessageType },
    LLMProvider,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    pub response: String,
}

/// A model that turns one prompt into one completion.
///
/// Clients are built once at startup and shared between request tasks, so
/// implementations must not keep per-call mutable state.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<CompletionResponse, LlmError>;

    fn get_model(&self) -> String;
}

pub fn new_client(config: &LlmConfig) -> Result<Arc<dyn ChatClient>, LlmError> {
    let client: Arc<dyn ChatClient> = match config.llm_type {
        LlmType::Gemini => {
            let specific_client = GeminiChatClient::from_config(config)?;
            Arc::new(specific_client)
        }
        LlmType::OpenAI => {
            let specific_client = OpenAIChatClient::from_config(config)?;
            Arc::new(specific_client)
        }
        LlmType::Ollama => {
            let specific_client = OllamaClient::from_config(config)?;
            Arc::new(specific_client)
        }
    };
    Ok(client)
}

pub(crate) fn build_rllm_provider(
    config: &LlmConfig,
    backend: LLMBackend,
    api_key: String
) -> Result<Box<dyn LLMProvider>, LlmError> {
    let mut builder = LLMBuilder::new()
        .backend(backend)
        .api_key(api_key)
        .model(&config.completion_model)
        .stream(false);

    if let Some(url) = &config.base_url {
        builder = builder.base_url(url);
    }
    if let Some(tokens) = config.max_tokens {
        builder = builder.max_tokens(tokens);
    }
    if let Some(temp) = config.temperature {
        builder = builder.temperature(temp);
    }
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout_seconds(secs);
    }

    builder.build().map_err(|e| LlmError::Build {
        provider: config.llm_type.clone(),
        message: e.to_string(),
    })
}

/// Sends the prompt as a single user turn. A reply without text becomes an empty completion.
pub(crate) async fn chat_once(
    llm: &dyn LLMProvider,
    provider: LlmType,
    prompt: &str
) -> Result<CompletionResponse, LlmError> {
    let messages = vec![ChatMessage {
        role: ChatRole::User,
        content: prompt.to_string(),
        message_type: MessageType::Text,
    }];
    let resp = llm.chat(&messages).await.map_err(|e| LlmError::Request {
        provider,
        message: e.to_string(),
    })?;
    Ok(completion_from_reply(resp.text()))
}

fn completion_from_reply(text: Option<String>) -> CompletionResponse {
    CompletionResponse { response: text.unwrap_or_default() }
}

pub(crate) fn require_api_key(config: &LlmConfig) -> Result<String, LlmError> {
    config.api_key
        .as_ref()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .ok_or_else(|| LlmError::MissingApiKey(config.llm_type.clone()))
}
