use serde::{Deserialize, Serialize};

/// Message in an Ollama chat conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

/// Message role
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// Request body for `POST /api/chat`
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    /// Disable streaming so the response arrives as a single JSON object
    pub stream: bool,
}

/// Response body from `POST /api/chat`
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub message: Message,
    pub model: Option<String>,
    #[serde(default)]
    pub done: bool,
    pub prompt_eval_count: Option<u64>,
    pub eval_count: Option<u64>,
}

impl Message {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

impl ChatRequest {
    /// Create a new non-streaming chat request
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            stream: false,
        }
    }
}

impl ChatResponse {
    /// The text content of the model's reply
    pub fn content(&self) -> &str {
        &self.message.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_serializes_lowercase() {
        let msg = Message::user("hello");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "hello");

        let msg = Message::system("rules");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "system");
    }

    #[test]
    fn test_chat_request_disables_streaming() {
        let request = ChatRequest::new("llama3.1", vec![Message::user("2+2?")]);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama3.1");
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_chat_response_deserializes_minimal_body() {
        let body = r#"{"message": {"role": "assistant", "content": "The answer is 4."}}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.content(), "The answer is 4.");
        assert!(!response.done);
        assert!(response.eval_count.is_none());
    }

    #[test]
    fn test_chat_response_deserializes_full_body() {
        let body = r#"{
            "model": "llama3.1",
            "message": {"role": "assistant", "content": "42"},
            "done": true,
            "prompt_eval_count": 26,
            "eval_count": 12
        }"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.model.as_deref(), Some("llama3.1"));
        assert!(response.done);
        assert_eq!(response.eval_count, Some(12));
    }
}
