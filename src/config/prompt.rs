use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use log::info;

use crate::models::chat::ConversationMessage;

pub const DEFAULT_SYSTEM_INSTRUCTION: &str =
    "შენ ხარ დამხმარე AI ასისტენტი Subconscious აპისთვის. \
უპასუხე მკაფიოდ, სტრუქტურირებულად და მაქსიმალურად სასარგებლოდ. \
თუ კითხვა არ არის ნათელი, სთხოვი მომხმარებელს დაზუსტებას.";
pub const DEFAULT_HISTORY_HEADER: &str = "საუბრის ისტორია:";
pub const DEFAULT_QUERY_HEADER: &str = "ახლა მომხმარებლის ახალი კითხვა:";
pub const DEFAULT_CLOSING_INSTRUCTION: &str = "გთხოვ დეტალური და გასაგები პასუხი ქართულად.";
pub const EMPTY_HISTORY_PLACEHOLDER: &str = "—";

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Failed to read prompts file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse prompts file '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Fixed texts wrapped around the conversation when building a prompt.
///
/// Every field can be overridden from a JSON file; missing fields keep the
/// built-in Georgian defaults.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PromptConfig {
    pub system_instruction: String,
    pub history_header: String,
    pub query_header: String,
    pub closing_instruction: String,
    pub history_placeholder: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
            history_header: DEFAULT_HISTORY_HEADER.to_string(),
            query_header: DEFAULT_QUERY_HEADER.to_string(),
            closing_instruction: DEFAULT_CLOSING_INSTRUCTION.to_string(),
            history_placeholder: EMPTY_HISTORY_PLACEHOLDER.to_string(),
        }
    }
}

pub fn load_prompts<P: AsRef<Path>>(path: P) -> Result<PromptConfig, PromptError> {
    let display = path.as_ref().display().to_string();
    let file_content = fs::read_to_string(&path).map_err(|source| PromptError::Io {
        path: display.clone(),
        source,
    })?;
    let config: PromptConfig = serde_json
        ::from_str(&file_content)
        .map_err(|source| PromptError::Json { path: display.clone(), source })?;
    info!("Loaded prompt overrides from {}", display);
    Ok(config)
}

/// Renders prior turns as `Label: content` lines, or the placeholder when there are none.
pub fn format_history(config: &PromptConfig, history: &[ConversationMessage]) -> String {
    if history.is_empty() {
        return config.history_placeholder.clone();
    }
    history
        .iter()
        .map(|msg| format!("{}: {}", msg.role.label(), msg.content))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_chat_prompt(
    config: &PromptConfig,
    history: &[ConversationMessage],
    query: &str
) -> String {
    format!(
        "{}\n\n{}\n{}\n\n{}\nUser: {}\n\n{}",
        config.system_instruction,
        config.history_header,
        format_history(config, history),
        config.query_header,
        query,
        config.closing_instruction
    )
}
