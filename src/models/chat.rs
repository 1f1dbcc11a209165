use serde::{ Serialize, Deserialize };

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Speaker label used when the turn is rendered into a prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Assistant => "Assistant",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversationMessage {
    pub role: Role,
    pub content: String,
}

/// Body of `POST /api/chat`.
///
/// `conversation_history` may be omitted and then means "no prior turns".
/// `message` is required; an empty or blank message is rejected by the handler,
/// not by deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Vec<ConversationMessage>,
}

impl ChatRequest {
    pub fn has_history(&self) -> bool {
        !self.conversation_history.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub id: u32,
    pub content: String,
    pub section: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    pub model: String,
    pub has_history: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    pub sources: Vec<Source>,
    pub metadata: ResponseMetadata,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub rag_service_ready: bool,
}

impl HealthResponse {
    pub fn ok(rag_service_ready: bool) -> Self {
        Self {
            status: "ok".to_string(),
            rag_service_ready,
        }
    }
}

/// JSON body of every error response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn history_defaults_to_empty() {
        let req: ChatRequest = serde_json::from_value(json!({ "message": "Hello" })).unwrap();
        assert!(req.conversation_history.is_empty());
        assert!(!req.has_history());
    }

    #[test]
    fn unknown_role_is_rejected() {
        let result = serde_json::from_value::<ChatRequest>(json!({
            "message": "Hello",
            "conversation_history": [{ "role": "system", "content": "be nice" }]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn missing_message_is_rejected() {
        let result = serde_json::from_value::<ChatRequest>(json!({ "conversation_history": [] }));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_value::<ChatRequest>(json!({
            "message": "Hello",
            "session": "abc"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn history_order_is_preserved() {
        let req: ChatRequest = serde_json::from_value(json!({
            "message": "and now?",
            "conversation_history": [
                { "role": "user", "content": "first" },
                { "role": "assistant", "content": "second" },
                { "role": "user", "content": "third" }
            ]
        })).unwrap();
        let contents: Vec<&str> = req.conversation_history
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, ["first", "second", "third"]);
        assert_eq!(req.conversation_history[1].role, Role::Assistant);
    }

    #[test]
    fn response_serializes_to_flat_metadata_object() {
        let resp = ChatResponse {
            answer: "Hi there".to_string(),
            sources: vec![Source { id: 0, content: "c".to_string(), section: "s".to_string() }],
            metadata: ResponseMetadata { model: "gemini-2.5-flash".to_string(), has_history: false },
        };
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({
                "answer": "Hi there",
                "sources": [{ "id": 0, "content": "c", "section": "s" }],
                "metadata": { "model": "gemini-2.5-flash", "has_history": false }
            })
        );
    }
}
