use crate::agent::{ self, ChatAgent, ChatError };
use crate::models::chat::{ ChatRequest, ChatResponse, ErrorBody, HealthResponse };
use std::sync::Arc;
use axum::{
    routing::{ get, post },
    Router,
    Json,
    extract::State,
    response::{ IntoResponse, Response },
};
use tower_http::cors::{ AllowHeaders, AllowMethods, AllowOrigin, CorsLayer };

#[derive(Clone)]
pub struct AppState {
    agent: Option<Arc<ChatAgent>>,
}

impl AppState {
    pub fn new(agent: Option<Arc<ChatAgent>>) -> Self {
        Self { agent }
    }

    pub fn is_ready(&self) -> bool {
        self.agent.is_some()
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.client_message().to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    // Credentials cannot be combined with `*`, so every allow-list echoes the request.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/chat", post(chat_handler))
        .route("/chat", post(chat_handler))
        .layer(cors)
        .with_state(state)
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.is_ready()))
}

async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ChatError> {
    let response = agent::handle_chat(state.agent.as_deref(), &request).await?;
    Ok(Json(response))
}
