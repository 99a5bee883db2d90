use gasless_core::{AgentBuilder, WalletSecret};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::Session;

/// Process-wide session store - one session per wallet, never evicted
///
/// Sessions are keyed by the secret's fingerprint, so the plaintext key is
/// never used as a map key.
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Arc<Session>>>,
    builder: Arc<dyn AgentBuilder>,
}

impl SessionStore {
    pub fn new(builder: Arc<dyn AgentBuilder>) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            builder,
        }
    }

    /// Look up the session for `secret` without creating one
    pub async fn get(&self, secret: &WalletSecret) -> Option<Arc<Session>> {
        self.sessions.lock().await.get(&secret.fingerprint()).cloned()
    }

    /// Return the existing session for `secret`, or construct and store one.
    ///
    /// Construction runs without the lock held, so two first-time requests
    /// for the same wallet may both build an agent. The first insert wins and
    /// every caller gets the retained session.
    pub async fn get_or_create(&self, http_request_id: &str, secret: &WalletSecret) -> Arc<Session> {
        let key = secret.fingerprint();
        let short = secret.short_fingerprint();

        {
            let sessions = self.sessions.lock().await;
            if let Some(session) = sessions.get(&key) {
                debug!("[{}] - [{}] Using existing session", http_request_id, short);
                return session.clone();
            }
        }

        info!("[{}] - [{}] Creating new session", http_request_id, short);

        let session = match self.builder.construct(secret).await {
            Ok(constructed) => Session::from(constructed),
            Err(e) => {
                warn!(
                    "[{}] - [{}] Agent construction failed, using degraded session: {}",
                    http_request_id, short, e
                );
                Session::degraded()
            }
        };

        // Re-acquire lock to insert; a concurrent creator may have won
        self.sessions
            .lock()
            .await
            .entry(key)
            .or_insert_with(|| Arc::new(session))
            .clone()
    }

    /// Get the number of cached sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
