use async_trait::async_trait;
use gasless_llm::{ChatMessage, ChatProvider, ChatRequest, LlmClient};
use std::sync::Arc;
use tracing::{debug, info};

use super::{
    agent_update, Agent, AgentBuilder, AgentError, ChunkStream, Constructed, HumanMessage,
    MemorySaver, RunConfig,
};
use crate::{AgentConfig, WalletSecret};

/// LLM-backed agent that keeps per-thread history in a [`MemorySaver`]
///
/// Every call appends the inbound messages to the thread, asks the model for
/// the next assistant turn and yields it as one agent update.
pub struct ReactAgent {
    provider: Arc<dyn ChatProvider>,
    model: String,
    system_prompt: String,
    memory: Arc<MemorySaver>,
}

impl ReactAgent {
    pub fn new(
        provider: Arc<dyn ChatProvider>,
        model: impl Into<String>,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            model: model.into(),
            system_prompt: system_prompt.into(),
            memory: Arc::new(MemorySaver::new()),
        }
    }

    pub fn memory(&self) -> &MemorySaver {
        &self.memory
    }
}

#[async_trait]
impl Agent for ReactAgent {
    async fn stream(
        &self,
        messages: Vec<HumanMessage>,
        config: &RunConfig,
    ) -> Result<ChunkStream, AgentError> {
        let provider = self.provider.clone();
        let memory = self.memory.clone();
        let model = self.model.clone();
        let system_prompt = self.system_prompt.clone();
        let thread_id = config.thread_id().to_string();

        let stream = async_stream::stream! {
            memory
                .append(&thread_id, messages.into_iter().map(ChatMessage::from))
                .await;

            let mut trace = vec![ChatMessage::system(system_prompt)];
            trace.extend(memory.history(&thread_id).await);
            debug!("[{}] invoking model with {} messages", thread_id, trace.len());

            match provider.chat(ChatRequest::new(model, trace)).await {
                Ok(response) => {
                    debug!(
                        "[{}] reply id={} model={}",
                        thread_id,
                        response.id.as_deref().unwrap_or("-"),
                        response.model.as_deref().unwrap_or("-")
                    );
                    let content = response.message.content().to_string();
                    memory.append(&thread_id, [response.message]).await;
                    yield Ok(agent_update(content));
                }
                Err(e) => {
                    yield Err(AgentError::from(e));
                }
            }
        };

        Ok(Box::pin(stream))
    }
}

/// Constructs a [`ReactAgent`] for a wallet from an [`AgentConfig`]
pub struct ReactAgentBuilder {
    config: AgentConfig,
}

impl ReactAgentBuilder {
    pub fn new(config: AgentConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl AgentBuilder for ReactAgentBuilder {
    async fn construct(&self, secret: &WalletSecret) -> Result<Constructed, AgentError> {
        secret.validate()?;

        let api_key = self
            .config
            .llm_api_key
            .as_deref()
            .ok_or_else(|| AgentError::Construction("LLM API key is not configured".to_string()))?;
        let rpc_url = self
            .config
            .rpc_url
            .as_deref()
            .ok_or_else(|| AgentError::Construction("RPC URL is not configured".to_string()))?;
        if !rpc_url.starts_with("http://") && !rpc_url.starts_with("https://") {
            return Err(AgentError::Construction(format!(
                "RPC URL must be http(s): {}",
                rpc_url
            )));
        }
        if self.config.toolkit_api_key.is_none() {
            return Err(AgentError::Construction(
                "toolkit API key is not configured".to_string(),
            ));
        }

        let client = LlmClient::new(&self.config.llm_base_url, api_key)?;
        let agent = ReactAgent::new(
            Arc::new(client),
            &self.config.model,
            self.config.effective_prompt(),
        );

        info!(
            "[{}] agent constructed model={} chain={}",
            secret.short_fingerprint(),
            self.config.model,
            self.config.chain_id
        );

        Ok(Constructed {
            agent: Arc::new(agent),
            config: RunConfig::new(&self.config.thread_id),
        })
    }
}
