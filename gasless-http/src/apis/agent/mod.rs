pub mod types;
pub mod handler;

pub use types::{AgentAction, AgentRequest, InboundMessage, InitializeResponse};
pub use handler::handle_agent;
