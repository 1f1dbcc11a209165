use std::sync::atomic::{ AtomicUsize, Ordering };
use std::sync::Arc;

use ai_service::agent::ChatAgent;
use ai_service::config::prompt::PromptConfig;
use ai_service::llm::chat::{ ChatClient, CompletionResponse };
use ai_service::llm::{ LlmError, LlmType };
use ai_service::server::api::{ router, AppState };
use async_trait::async_trait;
use axum::body::{ to_bytes, Body };
use axum::http::{ header, Method, Request };
use axum::response::Response;
use axum::Router;

pub const STUB_MODEL: &str = "gemini-2.5-flash";

pub enum Reply {
    Text(String),
    Fail(String),
}

pub struct StubChatClient {
    reply: Reply,
    calls: AtomicUsize,
}

impl StubChatClient {
    pub fn text(text: &str) -> Arc<Self> {
        Arc::new(Self { reply: Reply::Text(text.to_string()), calls: AtomicUsize::new(0) })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self { reply: Reply::Fail(message.to_string()), calls: AtomicUsize::new(0) })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatClient for StubChatClient {
    async fn complete(&self, _prompt: &str) -> Result<CompletionResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Reply::Text(text) => Ok(CompletionResponse { response: text.clone() }),
            Reply::Fail(message) => Err(LlmError::Request {
                provider: LlmType::Gemini,
                message: message.clone(),
            }),
        }
    }

    fn get_model(&self) -> String {
        STUB_MODEL.to_string()
    }
}

pub fn app_with(client: Arc<StubChatClient>) -> Router {
    let agent = ChatAgent::new(client, PromptConfig::default());
    router(AppState::new(Some(Arc::new(agent))))
}

pub fn app_without_model() -> Router {
    router(AppState::new(None))
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().method(Method::GET).uri(uri).body(Body::empty()).unwrap()
}

pub async fn response_to_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn response_to_json(response: Response) -> serde_json::Value {
    serde_json::from_str(&response_to_string(response).await).unwrap()
}
