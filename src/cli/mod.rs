use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Chat LLM Provider Args ---
    /// Type of LLM provider for chat completion (gemini, openai, ollama)
    #[arg(long, env = "CHAT_LLM_TYPE", default_value = "gemini")]
    pub chat_llm_type: String,

    /// API key for the chat LLM provider, whichever it is. Required for gemini and openai.
    /// Takes precedence over --gemini-api-key.
    #[arg(long, env = "CHAT_API_KEY")]
    pub chat_api_key: Option<String>,

    /// Gemini API key, used when CHAT_API_KEY is not set.
    #[arg(long, env = "GEMINI_API_KEY")]
    pub gemini_api_key: Option<String>,

    /// Model name for chat completion (e.g., gemini-2.5-flash, gpt-4o, llama3)
    #[arg(long, env = "LLM_MODEL", default_value = "gemini-2.5-flash")]
    pub llm_model: String,

    /// Base URL for the chat LLM provider API (e.g., http://localhost:11434 for Ollama)
    #[arg(long, env = "CHAT_BASE_URL")] // No default, let the provider handle defaults if None
    pub chat_base_url: Option<String>,

    /// Sampling temperature forwarded to the provider.
    #[arg(long, env = "TEMPERATURE", default_value = "0.7")]
    pub temperature: f32,

    /// Upper bound on generated tokens forwarded to the provider.
    #[arg(long, env = "MAX_TOKENS", default_value = "1024")]
    pub max_tokens: u32,

    /// Request timeout in seconds applied by the provider client. Unset means the provider default.
    #[arg(long, env = "LLM_TIMEOUT_SECS")]
    pub llm_timeout_secs: Option<u64>,

    // --- Retrieval Args (reserved, not used by the chat pipeline) ---
    /// Embedding model for document retrieval.
    #[arg(
        long,
        env = "EMBEDDING_MODEL",
        default_value = "sentence-transformers/paraphrase-multilingual-MiniLM-L12-v2"
    )]
    pub embedding_model: String,

    /// Vector store backend for document retrieval.
    #[arg(long, env = "VECTOR_STORE", default_value = "faiss")]
    pub vector_store: String,

    /// Document chunk size in characters.
    #[arg(long, env = "CHUNK_SIZE", default_value = "1000")]
    pub chunk_size: usize,

    /// Overlap between consecutive chunks in characters.
    #[arg(long, env = "CHUNK_OVERLAP", default_value = "200")]
    pub chunk_overlap: usize,

    /// Number of retrieved chunks per query.
    #[arg(long, env = "TOP_K_RESULTS", default_value = "4")]
    pub top_k_results: usize,

    /// Directory holding source documents.
    #[arg(long, env = "DATA_PATH", default_value = "app/data")]
    pub data_path: String,

    /// Directory holding the vector index.
    #[arg(long, env = "INDEX_PATH", default_value = "faiss_index")]
    pub index_path: String,

    // --- General App Args ---
    /// Host address for the HTTP server to listen on.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port for the HTTP server to listen on.
    #[arg(long, env = "PORT", default_value = "8000")]
    pub port: u16,

    /// Deployment environment name (development, production, ...).
    #[arg(long, env = "ENVIRONMENT", default_value = "development")]
    pub environment: String,

    /// Optional path to a JSON file overriding the prompt texts.
    #[arg(long, env = "PROMPTS_PATH")]
    pub prompts_path: Option<String>,

    /// Optional path to the TLS certificate file (PEM format) for enabling HTTPS. Requires --tls-key-path.
    #[arg(long, env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<String>,

    /// Optional path to the TLS private key file (PEM format) for enabling HTTPS. Requires --tls-cert-path.
    #[arg(long, env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<String>,

    #[arg(long, env = "ENABLE_TLS", default_value = "false")]
    pub enable_tls: bool,
}

impl Args {
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The provider API key with blank values treated as absent.
    pub fn api_key(&self) -> Option<String> {
        let non_blank = |key: &Option<String>| {
            key.as_ref()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
        };
        non_blank(&self.chat_api_key).or_else(|| non_blank(&self.gemini_api_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn default_of(id: &str) -> String {
        let command = Args::command();
        let arg = command
            .get_arguments()
            .find(|a| a.get_id().as_str() == id)
            .unwrap();
        arg.get_default_values()[0].to_string_lossy().into_owned()
    }

    #[test]
    fn defaults_match_settings() {
        assert_eq!(default_of("chat_llm_type"), "gemini");
        assert_eq!(default_of("llm_model"), "gemini-2.5-flash");
        assert_eq!(default_of("host"), "0.0.0.0");
        assert_eq!(default_of("port"), "8000");
        assert_eq!(default_of("chunk_size"), "1000");
        assert_eq!(default_of("top_k_results"), "4");
        assert_eq!(default_of("enable_tls"), "false");
    }

    #[test]
    fn blank_api_key_is_absent() {
        let args = Args::try_parse_from([
            "ai-service",
            "--chat-api-key",
            "   ",
            "--gemini-api-key",
            "",
        ]).unwrap();
        assert_eq!(args.api_key(), None);
    }

    #[test]
    fn chat_key_wins_over_gemini_key() {
        let args = Args::try_parse_from([
            "ai-service",
            "--chat-api-key",
            "sk-openai",
            "--gemini-api-key",
            "g-key",
        ]).unwrap();
        assert_eq!(args.api_key().as_deref(), Some("sk-openai"));
    }

    #[test]
    fn gemini_key_used_when_chat_key_blank() {
        let args = Args::try_parse_from([
            "ai-service",
            "--chat-api-key",
            "",
            "--gemini-api-key",
            " g-key ",
        ]).unwrap();
        assert_eq!(args.api_key().as_deref(), Some("g-key"));
    }

    #[test]
    fn server_addr_joins_host_and_port() {
        let args =
            Args::try_parse_from(["ai-service", "--host", "127.0.0.1", "--port", "9000"]).unwrap();
        assert_eq!(args.server_addr(), "127.0.0.1:9000");
    }
}
