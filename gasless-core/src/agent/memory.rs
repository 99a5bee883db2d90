use gasless_llm::ChatMessage;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// In-memory conversation checkpoints, one message history per thread id
#[derive(Default)]
pub struct MemorySaver {
    threads: Mutex<HashMap<String, Vec<ChatMessage>>>,
}

impl MemorySaver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append<I>(&self, thread_id: &str, messages: I)
    where
        I: IntoIterator<Item = ChatMessage>,
    {
        self.threads
            .lock()
            .await
            .entry(thread_id.to_string())
            .or_default()
            .extend(messages);
    }

    pub async fn history(&self, thread_id: &str) -> Vec<ChatMessage> {
        self.threads
            .lock()
            .await
            .get(thread_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn threads_are_isolated() {
        let memory = MemorySaver::new();
        memory.append("a", [ChatMessage::user("one")]).await;
        memory.append("b", [ChatMessage::user("two")]).await;
        memory.append("a", [ChatMessage::assistant("three")]).await;

        assert_eq!(
            memory.history("a").await,
            vec![ChatMessage::user("one"), ChatMessage::assistant("three")]
        );
        assert_eq!(memory.history("b").await.len(), 1);
        assert!(memory.history("missing").await.is_empty());
    }
}
