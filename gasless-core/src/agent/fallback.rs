use futures::stream::{self, StreamExt};

use super::{agent_update, ChunkStream, RunConfig};

pub const FALLBACK_REPLY: &str = "I'm sorry, but I couldn't initialize the blockchain tools. This could be due to network issues or configuration problems.";

pub const FALLBACK_THREAD_ID: &str = "fallback-agent";

pub fn fallback_config() -> RunConfig {
    RunConfig::new(FALLBACK_THREAD_ID)
}

/// Single-chunk stream used by degraded sessions
pub fn fallback_stream(reply: impl Into<String>) -> ChunkStream {
    stream::once(futures::future::ready(Ok(agent_update(reply)))).boxed()
}
