use serde_json::json;

use super::Chunk;

/// Build an agent-node update carrying one assistant message:
/// `{"agent": {"messages": [{"kwargs": {"content": ...}}]}}`
pub fn agent_update(content: impl Into<String>) -> Chunk {
    json!({
        "agent": {
            "messages": [
                { "kwargs": { "content": content.into() } }
            ]
        }
    })
}

/// Content of the first message in an agent-node update, if the chunk is one
pub fn update_content(chunk: &Chunk) -> Option<&str> {
    chunk
        .get("agent")?
        .get("messages")?
        .get(0)?
        .get("kwargs")?
        .get("content")?
        .as_str()
}
