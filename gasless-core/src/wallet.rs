use std::fmt;

use crate::agent::AgentError;
use crate::digest::sha256_hex;

const FINGERPRINT_DISPLAY_LEN: usize = 12;

/// A wallet private key as supplied by the client.
///
/// The plaintext is only reachable through [`WalletSecret::expose`]; caches and
/// logs use the fingerprint instead.
#[derive(Clone, PartialEq, Eq)]
pub struct WalletSecret(String);

impl WalletSecret {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().trim().to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Hex SHA-256 of the secret, stable for the process lifetime
    pub fn fingerprint(&self) -> String {
        sha256_hex(&self.0)
    }

    /// Truncated fingerprint for log lines
    pub fn short_fingerprint(&self) -> String {
        let mut fp = self.fingerprint();
        fp.truncate(FINGERPRINT_DISPLAY_LEN);
        fp
    }

    /// Check the `0x` + 64 hex digit shape of an EVM private key
    pub fn validate(&self) -> Result<(), AgentError> {
        let hex_part = self
            .0
            .strip_prefix("0x")
            .ok_or_else(|| AgentError::InvalidSecret("missing 0x prefix".to_string()))?;

        if hex_part.len() != 64 {
            return Err(AgentError::InvalidSecret(format!(
                "expected 64 hex digits, got {}",
                hex_part.len()
            )));
        }
        if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AgentError::InvalidSecret("non-hex character".to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for WalletSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WalletSecret({}…)", self.short_fingerprint())
    }
}
