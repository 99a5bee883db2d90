pub use gasless_llm::DEFAULT_BASE_URL;

pub const DEFAULT_MODEL: &str = "openai/gpt-4o";
pub const DEFAULT_CHAIN_ID: u64 = 56;
pub const DEFAULT_THREAD_ID: &str = "0xGasless AgentKit Chat";

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful agent that can interact with EVM chains using 0xGasless smart accounts. You can perform \
gasless transactions using the account abstraction wallet. You can check balances of ETH and any ERC20 token \
by providing their contract address. Be concise and helpful with your responses.";

/// Settings used to construct a wallet agent
#[derive(Clone, Debug)]
pub struct AgentConfig {
    /// Model identifier sent to the chat completions endpoint
    pub model: String,
    pub llm_base_url: String,
    pub llm_api_key: Option<String>,
    /// JSON-RPC endpoint of the target chain
    pub rpc_url: Option<String>,
    /// API key for the smart-account toolkit (bundler and paymaster)
    pub toolkit_api_key: Option<String>,
    pub chain_id: u64,
    pub system_prompt: String,
    /// Conversation thread every session starts on
    pub thread_id: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            llm_base_url: DEFAULT_BASE_URL.to_string(),
            llm_api_key: None,
            rpc_url: None,
            toolkit_api_key: None,
            chain_id: DEFAULT_CHAIN_ID,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            thread_id: DEFAULT_THREAD_ID.to_string(),
        }
    }
}

impl AgentConfig {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_llm_base_url(mut self, url: impl Into<String>) -> Self {
        self.llm_base_url = url.into();
        self
    }

    pub fn with_llm_api_key(mut self, key: Option<String>) -> Self {
        self.llm_api_key = key.filter(|k| !k.is_empty());
        self
    }

    pub fn with_rpc_url(mut self, url: Option<String>) -> Self {
        self.rpc_url = url.filter(|u| !u.is_empty());
        self
    }

    pub fn with_toolkit_api_key(mut self, key: Option<String>) -> Self {
        self.toolkit_api_key = key.filter(|k| !k.is_empty());
        self
    }

    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// System prompt with the configured chain appended
    pub fn effective_prompt(&self) -> String {
        format!("{} The connected chain id is {}.", self.system_prompt, self.chain_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_openrouter_on_bsc() {
        let config = AgentConfig::default();
        assert_eq!(config.model, "openai/gpt-4o");
        assert_eq!(config.llm_base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.chain_id, 56);
        assert!(config.llm_api_key.is_none());
    }

    #[test]
    fn blank_keys_are_treated_as_missing() {
        let config = AgentConfig::default()
            .with_llm_api_key(Some(String::new()))
            .with_rpc_url(Some(String::new()))
            .with_toolkit_api_key(Some(String::new()));
        assert!(config.llm_api_key.is_none());
        assert!(config.rpc_url.is_none());
        assert!(config.toolkit_api_key.is_none());
    }

    #[test]
    fn prompt_mentions_chain() {
        let config = AgentConfig::default().with_chain_id(8453);
        assert!(config.effective_prompt().ends_with("The connected chain id is 8453."));
    }
}
