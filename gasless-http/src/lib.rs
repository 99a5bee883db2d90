pub mod http;
pub mod apis;
pub mod error;
pub mod session;
pub mod streaming;

pub use error::{ApiError, ApiJson, ErrorResponse};
pub use session::{Session, SessionStore};
pub use streaming::chunks_to_ndjson;
pub use http::{router, start_server, ServerConfig, ServerState};
