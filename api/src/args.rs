use burmafoodie_core::domain::common::{LLMConfig, RecipeChatConfig};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "burmafoodie-api", about = "BurmaFoodie recipe-chat API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    /// Model credential. Requests fail with a generic server-configuration
    /// error while this is unset.
    #[arg(long, env = "GEMINI_API_KEY", default_value = "")]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub gemini_model: String,
}

impl From<Args> for RecipeChatConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
            },
        }
    }
}
