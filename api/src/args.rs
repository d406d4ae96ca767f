use clap::Parser;
use productsafe_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_SEARCH_BASE_URL, LLMConfig,
    ProductSafeConfig, SearchConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "product-safe-api", version, about = "Product safety analyzer HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub search: SearchArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 5000)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct SearchArgs {
    #[arg(long = "search-base-url", env = "SEARCH_BASE_URL", default_value = DEFAULT_SEARCH_BASE_URL)]
    pub search_base_url: String,

    #[arg(long = "search-max-results", env = "SEARCH_MAX_RESULTS", default_value_t = 5)]
    pub search_max_results: usize,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Used when RUST_LOG is not set.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<&LlmArgs> for LLMConfig {
    fn from(args: &LlmArgs) -> Self {
        Self {
            gemini_api_key: String::new(),
            gemini_model: args.gemini_model.clone(),
            gemini_base_url: args.gemini_base_url.clone(),
        }
    }
}

impl From<&SearchArgs> for SearchConfig {
    fn from(args: &SearchArgs) -> Self {
        Self {
            base_url: args.search_base_url.clone(),
            max_results: args.search_max_results,
        }
    }
}

impl From<&Args> for ProductSafeConfig {
    fn from(args: &Args) -> Self {
        Self {
            llm: LLMConfig::from(&args.llm),
            search: SearchConfig::from(&args.search),
        }
    }
}
