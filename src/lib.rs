pub mod agent;
pub mod models;
pub mod server;
pub mod config;
pub mod llm;
pub mod cli;

use agent::ChatAgent;
use cli::Args;
use log::{ info, error };
use server::Server;
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr());
    info!("Environment: {}", args.environment);
    info!("Chat LLM Type: {}", args.chat_llm_type);
    info!("LLM Model: {}", args.llm_model);
    info!("Temperature: {}", args.temperature);
    info!("Max Tokens: {}", args.max_tokens);
    info!("API Key Provided: {}", args.api_key().is_some());
    info!("Prompts Path: {}", args.prompts_path.as_deref().unwrap_or("built-in"));
    info!("TLS Enabled: {}", args.enable_tls);
    info!("--- Retrieval Settings (not used by chat) ---");
    info!("Embedding Model: {}", args.embedding_model);
    info!("Vector Store: {}", args.vector_store);
    info!("Chunk Size / Overlap: {} / {}", args.chunk_size, args.chunk_overlap);
    info!("Top K Results: {}", args.top_k_results);
    info!("Data Path: {}", args.data_path);
    info!("Index Path: {}", args.index_path);
    info!("-------------------------");

    let agent = match ChatAgent::initialize(&args) {
        Ok(agent) => Some(Arc::new(agent)),
        Err(e) => {
            error!("Chat agent init error: {}", e);
            None
        }
    };

    let server = Server::new(args.server_addr(), agent, args.clone());
    server.run().await?;

    Ok(())
}
