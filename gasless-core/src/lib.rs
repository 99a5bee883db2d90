pub mod agent;
pub mod config;
pub mod digest;
pub mod wallet;

pub use agent::{
    Agent, AgentBuilder, AgentError, Chunk, ChunkStream, Constructed, HumanMessage, ReactAgent,
    ReactAgentBuilder, RunConfig,
};
pub use config::AgentConfig;
pub use wallet::WalletSecret;
