use async_trait::async_trait;
use log::info;

use super::{ build_rllm_provider, chat_once, require_api_key, ChatClient, CompletionResponse };
use crate::llm::{ LlmConfig, LlmError, LlmType };
use rllm::builder::LLMBackend;
use rllm::LLMProvider;

pub struct OpenAIChatClient {
    llm: Box<dyn LLMProvider>,
    model: String,
    base_url: Option<String>,
}

impl OpenAIChatClient {
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let api_key = require_api_key(config)?;
        let llm = build_rllm_provider(config, LLMBackend::OpenAI, api_key)?;

        Ok(Self {
            llm,
            model: config.completion_model.clone(),
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl ChatClient for OpenAIChatClient {
    async fn complete(&self, prompt: &str) -> Result<CompletionResponse, LlmError> {
        info!("OpenAIChatClient::complete() → model={} base_url={:?}", self.model, self.base_url);
        chat_once(self.llm.as_ref(), LlmType::OpenAI, prompt).await
    }

    fn get_model(&self) -> String {
        self.model.clone()
    }
}
