use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use gasless_core::{AgentBuilder, AgentConfig, ReactAgentBuilder};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::apis;
use crate::session::SessionStore;
use crate::ApiError;

/// Configuration for the HTTP server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Server bind address (e.g., "127.0.0.1:3000")
    pub address: String,
    /// Settings for agents built on initialize
    pub agent: AgentConfig,
}

impl ServerConfig {
    /// Create a new server config with the given address and default agent settings
    pub fn new(address: String) -> Self {
        Self {
            address,
            agent: AgentConfig::default(),
        }
    }

    pub fn with_agent(mut self, agent: AgentConfig) -> Self {
        self.agent = agent;
        self
    }
}

/// Server state holding the session store
#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<SessionStore>,
}

impl ServerState {
    pub fn new(builder: Arc<dyn AgentBuilder>) -> Self {
        Self {
            store: Arc::new(SessionStore::new(builder)),
        }
    }
}

async fn handle_health(State(state): State<ServerState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "sessions": state.store.session_count().await,
    }))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "An unknown error occurred".to_string()
    };
    ApiError::Internal(message).into_response()
}

/// Build the application router around `state`
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/api/agent", post(apis::agent::handle_agent))
        .route("/health", get(handle_health))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(
    config: ServerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let builder = ReactAgentBuilder::new(config.agent.clone());
    let state = ServerState::new(Arc::new(builder));

    println!("✓ Session store initialized");
    println!("  Model: \x1b[1m{}\x1b[0m", config.agent.model);
    println!("  Chain id: \x1b[1m{}\x1b[0m", config.agent.chain_id);
    if config.agent.llm_api_key.is_none()
        || config.agent.rpc_url.is_none()
        || config.agent.toolkit_api_key.is_none()
    {
        println!("  \x1b[33mLLM key, RPC URL or toolkit key missing: sessions will start degraded\x1b[0m");
    }
    println!();

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.address).await?;

    println!("Server starting on \x1b[1mhttp://{}\x1b[0m", config.address);
    println!("\nAvailable endpoints:");
    println!("  \x1b[1mPOST /api/agent\x1b[0m    - Initialize a wallet session (x-action: chat to stream a reply)");
    println!("  \x1b[1mGET  /health\x1b[0m       - Liveness and session count");
    println!("\nPress Ctrl+C to stop\n");

    info!("HTTP server listening on {}", config.address);

    axum::serve(listener, app).await?;
    Ok(())
}
