mod chunk;
mod error;
mod fallback;
mod memory;
mod react;

pub use chunk::{agent_update, update_content};
pub use error::AgentError;
pub use fallback::{fallback_config, fallback_stream, FALLBACK_REPLY, FALLBACK_THREAD_ID};
pub use memory::MemorySaver;
pub use react::{ReactAgent, ReactAgentBuilder};

use async_trait::async_trait;
use futures::stream::BoxStream;
use gasless_llm::ChatMessage;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::WalletSecret;

/// One unit of agent output, forwarded to clients as-is
pub type Chunk = serde_json::Value;

/// Lazy, finite, non-restartable sequence of chunks
pub type ChunkStream = BoxStream<'static, Result<Chunk, AgentError>>;

/// Groups a conversation's state inside the agent.
///
/// Serializes as `{"configurable": {"thread_id": "..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub configurable: Configurable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configurable {
    pub thread_id: String,
}

impl RunConfig {
    pub fn new(thread_id: impl Into<String>) -> Self {
        Self {
            configurable: Configurable {
                thread_id: thread_id.into(),
            },
        }
    }

    pub fn thread_id(&self) -> &str {
        &self.configurable.thread_id
    }
}

/// A user turn in the agent's message representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanMessage {
    pub content: String,
}

impl HumanMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl From<HumanMessage> for ChatMessage {
    fn from(msg: HumanMessage) -> Self {
        ChatMessage::user(msg.content)
    }
}

/// A running agent that answers message lists with a chunk stream
#[async_trait]
pub trait Agent: Send + Sync {
    async fn stream(
        &self,
        messages: Vec<HumanMessage>,
        config: &RunConfig,
    ) -> Result<ChunkStream, AgentError>;
}

/// Result of a successful agent construction
pub struct Constructed {
    pub agent: Arc<dyn Agent>,
    pub config: RunConfig,
}

/// Builds one agent per wallet secret
#[async_trait]
pub trait AgentBuilder: Send + Sync {
    async fn construct(&self, secret: &WalletSecret) -> Result<Constructed, AgentError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_config_wire_shape() {
        let config = RunConfig::new("thread-1");
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            serde_json::json!({ "configurable": { "thread_id": "thread-1" } })
        );
        assert_eq!(config.thread_id(), "thread-1");
    }

    #[test]
    fn human_message_becomes_user_turn() {
        let msg: ChatMessage = HumanMessage::new("hello").into();
        assert_eq!(msg, ChatMessage::user("hello"));
    }
}
