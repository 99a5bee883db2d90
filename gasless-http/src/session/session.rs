use gasless_core::agent::{fallback_config, fallback_stream, Constructed, FALLBACK_REPLY};
use gasless_core::{Agent, AgentError, ChunkStream, HumanMessage, RunConfig};
use std::sync::Arc;

/// A cached wallet session
///
/// `Real` wraps a constructed agent. `Degraded` stands in when construction
/// failed and answers every chat with a fixed reply.
pub enum Session {
    Real {
        agent: Arc<dyn Agent>,
        config: RunConfig,
    },
    Degraded {
        reply: String,
        config: RunConfig,
    },
}

impl Session {
    pub fn degraded() -> Self {
        Session::Degraded {
            reply: FALLBACK_REPLY.to_string(),
            config: fallback_config(),
        }
    }

    pub fn config(&self) -> &RunConfig {
        match self {
            Session::Real { config, .. } | Session::Degraded { config, .. } => config,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Session::Degraded { .. })
    }

    /// Start the agent's stream for `messages` on this session's run config
    pub async fn stream(&self, messages: Vec<HumanMessage>) -> Result<ChunkStream, AgentError> {
        match self {
            Session::Real { agent, config } => agent.stream(messages, config).await,
            Session::Degraded { reply, .. } => Ok(fallback_stream(reply.clone())),
        }
    }
}

impl From<Constructed> for Session {
    fn from(constructed: Constructed) -> Self {
        Session::Real {
            agent: constructed.agent,
            config: constructed.config,
        }
    }
}
