use crate::cli::Args;
use crate::config::prompt::{ self, PromptConfig, PromptError };
use crate::llm::chat::{ ChatClient, new_client as new_chat_client };
use crate::llm::{ LlmConfig, LlmError, LlmType, ParseLlmTypeError };
use crate::models::chat::{ ChatRequest, ChatResponse, ResponseMetadata, Source };

use axum::http::StatusCode;
use log::{ info, error };
use std::sync::Arc;
use thiserror::Error;

pub const EMPTY_QUERY_MESSAGE: &str = "გთხოვთ დაწეროთ თქვენი კითხვა";
pub const SERVICE_UNAVAILABLE_MESSAGE: &str = "სერვისი დროებით მიუწვდომელია";
pub const PROCESSING_ERROR_MESSAGE: &str = "შეცდომა დამუშავებისას";
pub const FALLBACK_ANSWER: &str = "ვერ შევძელი ამ კითხვის დამუშავება, სცადე სხვა ფორმულირება.";

/// Startup failures that leave the service running without a model.
#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    UnsupportedProvider(#[from] ParseLlmTypeError),

    #[error(transparent)]
    Client(#[from] LlmError),

    #[error(transparent)]
    Prompts(#[from] PromptError),
}

/// Outcome of a chat request that did not produce an answer.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat agent is not initialized")]
    ServiceUnavailable,

    #[error("query is empty")]
    EmptyQuery,

    #[error("model call failed: {0}")]
    Processing(#[source] LlmError),
}

impl ChatError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ChatError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ChatError::EmptyQuery => StatusCode::BAD_REQUEST,
            ChatError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text shown to the caller. Never contains provider error details.
    pub fn client_message(&self) -> &'static str {
        match self {
            ChatError::ServiceUnavailable => SERVICE_UNAVAILABLE_MESSAGE,
            ChatError::EmptyQuery => EMPTY_QUERY_MESSAGE,
            ChatError::Processing(_) => PROCESSING_ERROR_MESSAGE,
        }
    }
}

pub struct ChatAgent {
    chat_client: Arc<dyn ChatClient>,
    prompt_config: PromptConfig,
}

impl ChatAgent {
    pub fn new(chat_client: Arc<dyn ChatClient>, prompt_config: PromptConfig) -> Self {
        Self { chat_client, prompt_config }
    }

    /// Builds the model client and loads prompt overrides. Called once at startup.
    pub fn initialize(args: &Args) -> Result<Self, InitError> {
        let chat_llm_type: LlmType = args.chat_llm_type.parse()?;
        let chat_config = LlmConfig {
            llm_type: chat_llm_type,
            api_key: args.api_key(),
            completion_model: args.llm_model.clone(),
            base_url: args.chat_base_url.clone(),
            max_tokens: Some(args.max_tokens),
            temperature: Some(args.temperature),
            timeout_secs: args.llm_timeout_secs,
        };
        let chat_client = new_chat_client(&chat_config)?;
        info!(
            "Chat client configured: Type={}, Model={}, BaseURL={}",
            chat_config.llm_type,
            chat_config.completion_model,
            chat_config.base_url.as_deref().unwrap_or("provider default")
        );

        let prompt_config = match &args.prompts_path {
            Some(path) => prompt::load_prompts(path)?,
            None => PromptConfig::default(),
        };

        Ok(Self::new(chat_client, prompt_config))
    }

    pub fn model(&self) -> String {
        self.chat_client.get_model()
    }

    pub async fn respond(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        if request.message.trim().is_empty() {
            return Err(ChatError::EmptyQuery);
        }

        let full_prompt = prompt::build_chat_prompt(
            &self.prompt_config,
            &request.conversation_history,
            &request.message
        );

        let completion = self.chat_client.complete(&full_prompt).await.map_err(|e| {
            error!("Error in chat request: {}", e);
            ChatError::Processing(e)
        })?;

        let answer = if completion.response.trim().is_empty() {
            FALLBACK_ANSWER.to_string()
        } else {
            completion.response
        };

        let model = self.model();
        Ok(ChatResponse {
            answer,
            sources: vec![generated_source(&model)],
            metadata: ResponseMetadata {
                model,
                has_history: request.has_history(),
            },
        })
    }
}

/// Placeholder citation: the answer comes from the model alone, nothing was retrieved.
fn generated_source(model: &str) -> Source {
    Source {
        id: 0,
        content: format!(
            "პასუხი გენერირებულია {} მოდელით მოცემული ისტორიის და კითხვის საფუძველზე.",
            model
        ),
        section: format!("model: {}", model),
    }
}

pub async fn handle_chat(
    agent: Option<&ChatAgent>,
    request: &ChatRequest
) -> Result<ChatResponse, ChatError> {
    let agent = agent.ok_or(ChatError::ServiceUnavailable)?;
    agent.respond(request).await
}
