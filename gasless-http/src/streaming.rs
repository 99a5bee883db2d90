use axum::body::Bytes;
use futures::stream::{Stream, StreamExt};
use gasless_core::{AgentError, ChunkStream};
use serde::Serialize;
use serde_json::json;
use std::convert::Infallible;
use tracing::{debug, error};

/// Serialize `value` as one newline-terminated JSON line
pub fn encode_line<T: Serialize>(value: &T) -> Result<Bytes, serde_json::Error> {
    let mut line = serde_json::to_vec(value)?;
    line.push(b'\n');
    Ok(Bytes::from(line))
}

/// The terminal `{"error": ...}` line appended when the agent fails mid-stream
pub fn error_line(message: &str) -> Bytes {
    let mut line = json!({ "error": message }).to_string().into_bytes();
    line.push(b'\n');
    Bytes::from(line)
}

/// Turn the outcome of starting an agent stream into newline-delimited JSON.
///
/// Chunks are forwarded in production order as soon as they arrive. The
/// first error (whether starting the stream or mid-stream) becomes a final
/// `{"error": ...}` line and ends the body; lines already sent stay sent.
/// Dropping the returned stream drops the agent stream with it.
pub fn chunks_to_ndjson(
    started: Result<ChunkStream, AgentError>,
    http_request_id: String,
) -> impl Stream<Item = Result<Bytes, Infallible>> {
    let chunks = match started {
        Ok(stream) => stream,
        Err(e) => futures::stream::once(futures::future::ready(Err(e))).boxed(),
    };

    futures::stream::unfold((chunks, false), move |state| {
        let http_request_id = http_request_id.clone();
        async move {
            let (mut chunks, done) = state;

            if done {
                return None;
            }

            match chunks.next().await {
                Some(Ok(chunk)) => match encode_line(&chunk) {
                    Ok(line) => Some((Ok(line), (chunks, false))),
                    Err(e) => {
                        error!("[{}] Failed to serialize chunk: {}", http_request_id, e);
                        Some((Ok(error_line(&e.to_string())), (chunks, true)))
                    }
                },
                Some(Err(e)) => {
                    error!("[{}] Error in stream: {}", http_request_id, e);
                    Some((Ok(error_line(&e.to_string())), (chunks, true)))
                }
                None => {
                    debug!("[{}] Stream completed", http_request_id);
                    None
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn lines(bytes: Vec<Result<Bytes, Infallible>>) -> Vec<Value> {
        bytes
            .into_iter()
            .map(|b| {
                let b = b.unwrap();
                assert_eq!(b.last(), Some(&b'\n'));
                serde_json::from_slice(&b[..b.len() - 1]).unwrap()
            })
            .collect()
    }

    fn scripted(items: Vec<Result<Value, AgentError>>) -> ChunkStream {
        futures::stream::iter(items).boxed()
    }

    #[tokio::test]
    async fn forwards_chunks_in_order() {
        let stream = scripted(vec![Ok(json!("a")), Ok(json!({ "b": 1 })), Ok(json!(3))]);
        let out: Vec<_> = chunks_to_ndjson(Ok(stream), "req".into()).collect().await;
        assert_eq!(lines(out), vec![json!("a"), json!({ "b": 1 }), json!(3)]);
    }

    #[tokio::test]
    async fn failure_appends_single_error_line() {
        let stream = scripted(vec![
            Ok(json!("a")),
            Ok(json!("b")),
            Err(AgentError::Streaming("rpc timeout".into())),
            Ok(json!("never sent")),
        ]);
        let out: Vec<_> = chunks_to_ndjson(Ok(stream), "req".into()).collect().await;
        assert_eq!(
            lines(out),
            vec![json!("a"), json!("b"), json!({ "error": "rpc timeout" })]
        );
    }

    #[tokio::test]
    async fn failure_to_start_is_an_error_line() {
        let out: Vec<_> = chunks_to_ndjson(
            Err(AgentError::Streaming("no model".into())),
            "req".into(),
        )
        .collect()
        .await;
        assert_eq!(lines(out), vec![json!({ "error": "no model" })]);
    }

    #[tokio::test]
    async fn empty_stream_produces_empty_body() {
        let out: Vec<_> = chunks_to_ndjson(Ok(scripted(vec![])), "req".into()).collect().await;
        assert!(out.is_empty());
    }
}
