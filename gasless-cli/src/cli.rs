use clap::{Args, Parser, Subcommand};
use gasless_core::config::{DEFAULT_BASE_URL, DEFAULT_CHAIN_ID, DEFAULT_MODEL};
use gasless_core::AgentConfig;
use gasless_http::ServerConfig;

#[derive(Parser, Debug)]
#[command(name = "gasless", version, about = "Wallet agent chat backend")]
pub struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Print the hex SHA-224 digest of a string
    Sha224 { data: String },
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    #[arg(long, env = "GASLESS_ADDRESS", default_value = "127.0.0.1:3000")]
    pub address: String,

    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    pub openrouter_api_key: Option<String>,

    #[arg(long, env = "LLM_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub llm_base_url: String,

    #[arg(long, env = "LLM_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    #[arg(long, env = "RPC_URL")]
    pub rpc_url: Option<String>,

    #[arg(long, env = "AGENTKIT_API_KEY", hide_env_values = true)]
    pub agentkit_api_key: Option<String>,

    #[arg(long, env = "CHAIN_ID", default_value_t = DEFAULT_CHAIN_ID)]
    pub chain_id: u64,
}

impl ServeArgs {
    pub fn into_server_config(self) -> ServerConfig {
        let agent = AgentConfig::default()
            .with_model(self.model)
            .with_llm_base_url(self.llm_base_url)
            .with_llm_api_key(self.openrouter_api_key)
            .with_rpc_url(self.rpc_url)
            .with_toolkit_api_key(self.agentkit_api_key)
            .with_chain_id(self.chain_id);

        ServerConfig::new(self.address).with_agent(agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["gasless", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        let config = args.into_server_config();
        assert_eq!(config.agent.model, "openai/gpt-4o");
        assert_eq!(config.agent.chain_id, 56);
    }

    #[test]
    fn serve_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "gasless",
            "--log-json",
            "serve",
            "--address",
            "0.0.0.0:8080",
            "--chain-id",
            "8453",
            "--rpc-url",
            "https://base.example",
            "--agentkit-api-key",
            "ak-123",
        ])
        .unwrap();
        assert!(cli.log_json);
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        let config = args.into_server_config();
        assert_eq!(config.address, "0.0.0.0:8080");
        assert_eq!(config.agent.chain_id, 8453);
        assert_eq!(config.agent.rpc_url.as_deref(), Some("https://base.example"));
        assert_eq!(config.agent.toolkit_api_key.as_deref(), Some("ak-123"));
    }

    #[test]
    fn sha224_takes_positional_data() {
        let cli = Cli::try_parse_from(["gasless", "sha224", "abc"]).unwrap();
        assert!(matches!(cli.command, Commands::Sha224 { ref data } if data == "abc"));
    }
}
