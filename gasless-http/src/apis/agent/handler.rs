use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Json, Response},
};
use gasless_core::{HumanMessage, WalletSecret};
use tracing::info;
use uuid::Uuid;

use super::types::{AgentAction, AgentRequest, InitializeResponse};
use crate::{chunks_to_ndjson, ApiError, ApiJson, ServerState};

/// POST /api/agent - initialize a wallet session or chat with it
pub async fn handle_agent(
    State(state): State<ServerState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<AgentRequest>,
) -> Result<Response, ApiError> {
    let request_id = Uuid::new_v4().to_string();
    let action = AgentAction::from_headers(&headers);

    match action {
        AgentAction::Chat => handle_chat(state, payload, request_id).await,
        AgentAction::Initialize => handle_initialize(state, payload, request_id).await,
    }
}

fn required_secret(payload: &AgentRequest, message: &str) -> Result<WalletSecret, ApiError> {
    let secret = WalletSecret::new(payload.private_key.clone().unwrap_or_default());
    if secret.is_empty() {
        return Err(ApiError::Validation(message.to_string()));
    }
    Ok(secret)
}

async fn handle_initialize(
    state: ServerState,
    payload: AgentRequest,
    request_id: String,
) -> Result<Response, ApiError> {
    let secret = required_secret(&payload, "Private key is required")?;
    info!("[{}] - [{}] POST /api/agent initialize", request_id, secret.short_fingerprint());

    let session = state.store.get_or_create(&request_id, &secret).await;

    Ok(Json(InitializeResponse {
        success: true,
        config: session.config().clone(),
    })
    .into_response())
}

async fn handle_chat(
    state: ServerState,
    payload: AgentRequest,
    request_id: String,
) -> Result<Response, ApiError> {
    let secret = required_secret(&payload, "Private key is required for chat")?;
    info!(
        "[{}] - [{}] POST /api/agent chat messages={}",
        request_id,
        secret.short_fingerprint(),
        payload.messages.len()
    );

    let session = state.store.get(&secret).await.ok_or(ApiError::NotInitialized)?;

    let messages: Vec<HumanMessage> = payload.messages.into_iter().map(HumanMessage::from).collect();
    let started = session.stream(messages).await;
    let body = Body::from_stream(chunks_to_ndjson(started, request_id));

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
