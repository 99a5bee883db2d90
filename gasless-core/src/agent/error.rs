use gasless_llm::LlmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("invalid wallet secret: {0}")]
    InvalidSecret(String),

    #[error("agent construction failed: {0}")]
    Construction(String),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("{0}")]
    Streaming(String),
}
