use axum::http::HeaderMap;
use gasless_core::{HumanMessage, RunConfig};
use serde::{Deserialize, Serialize};

/// Header that selects between initialize and chat
pub const ACTION_HEADER: &str = "x-action";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentAction {
    Initialize,
    Chat,
}

impl AgentAction {
    /// `x-action: chat` selects chat, anything else initializes
    pub fn from_headers(headers: &HeaderMap) -> Self {
        match headers.get(ACTION_HEADER).and_then(|v| v.to_str().ok()) {
            Some("chat") => AgentAction::Chat,
            _ => AgentAction::Initialize,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    pub content: String,
}

impl From<InboundMessage> for HumanMessage {
    fn from(msg: InboundMessage) -> Self {
        HumanMessage::new(msg.content)
    }
}

/// Body shared by both actions; `messages` is only read by chat
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRequest {
    #[serde(default)]
    pub private_key: Option<String>,
    #[serde(default)]
    pub messages: Vec<InboundMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResponse {
    pub success: bool,
    pub config: RunConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn action_defaults_to_initialize() {
        let mut headers = HeaderMap::new();
        assert_eq!(AgentAction::from_headers(&headers), AgentAction::Initialize);

        headers.insert(ACTION_HEADER, HeaderValue::from_static("init"));
        assert_eq!(AgentAction::from_headers(&headers), AgentAction::Initialize);

        headers.insert(ACTION_HEADER, HeaderValue::from_static("chat"));
        assert_eq!(AgentAction::from_headers(&headers), AgentAction::Chat);
    }

    #[test]
    fn request_uses_camel_case_key() {
        let req: AgentRequest = serde_json::from_str(
            r#"{"privateKey": "0xabc", "messages": [{"content": "hi"}]}"#,
        )
        .unwrap();
        assert_eq!(req.private_key.as_deref(), Some("0xabc"));
        assert_eq!(req.messages[0].content, "hi");

        let empty: AgentRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.private_key.is_none());
        assert!(empty.messages.is_empty());
    }
}
