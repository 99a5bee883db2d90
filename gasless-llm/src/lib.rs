pub mod client;
pub mod error;
pub mod message;

pub use client::{ChatProvider, ChatRequest, ChatResponse, LlmClient, DEFAULT_BASE_URL};
pub use error::LlmError;
pub use message::ChatMessage;
