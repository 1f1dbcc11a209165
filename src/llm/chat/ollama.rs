use reqwest::Client as HttpClient;
use serde::{ Deserialize, Serialize };
use async_trait::async_trait;
use std::time::Duration;
use super::{ ChatClient, CompletionResponse };
use crate::llm::{ LlmConfig, LlmError, LlmType };
use log::info;

const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Talks to a local Ollama server through its `/api/generate` endpoint. No API key.
#[derive(Debug)]
pub struct OllamaClient {
    http: HttpClient,
    base_url: String,
    completion_model: String,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: &'a GenerateOptions,
}

#[derive(Serialize, Debug, Clone)]
struct GenerateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaClient {
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let mut builder = HttpClient::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|e| LlmError::Build {
            provider: LlmType::Ollama,
            message: e.to_string(),
        })?;
        let base_url = config.base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            http,
            base_url,
            completion_model: config.completion_model.clone(),
            options: GenerateOptions {
                temperature: config.temperature,
                num_predict: config.max_tokens,
            },
        })
    }

    fn request_error(e: impl std::fmt::Display) -> LlmError {
        LlmError::Request {
            provider: LlmType::Ollama,
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl ChatClient for OllamaClient {
    async fn complete(&self, prompt: &str) -> Result<CompletionResponse, LlmError> {
        let url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));
        info!("OllamaClient::complete() → model={} url={}", self.completion_model, url);

        let req = GenerateRequest {
            model: &self.completion_model,
            prompt,
            stream: false,
            options: &self.options,
        };
        let resp = self.http
            .post(&url)
            .json(&req)
            .send().await
            .map_err(Self::request_error)?
            .error_for_status()
            .map_err(Self::request_error)?;
        let data = resp.json::<GenerateResponse>().await.map_err(Self::request_error)?;

        Ok(CompletionResponse { response: data.response })
    }

    fn get_model(&self) -> String {
        self.completion_model.clone()
    }
}
