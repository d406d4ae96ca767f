use anyhow::Context;
use clap::Parser;
use productsafe_api::{
    application::logging::init_logging,
    args::{LlmArgs, LogArgs, SearchArgs},
};
use productsafe_core::{
    application::create_service,
    domain::{
        analysis::{ports::ProductAnalysisService, value_objects::AnalyzeProductInput},
        common::{LLMConfig, ProductSafeConfig, SearchConfig},
        image::entities::ImageSource,
    },
};
use tracing::info;

/// Analyze one product photo and print the consumer report.
#[derive(Debug, Parser)]
#[command(name = "product-safe-cli", version)]
struct Cli {
    /// Local path or http(s) URL of the product photo.
    #[arg(default_value = "Kurkure.jpg")]
    image: String,

    #[arg(long = "api-key", env = "GOOGLE_API_KEY", hide_env_values = true, default_value = "")]
    api_key: String,

    /// Print the whole analysis as JSON instead of the final report.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    llm: LlmArgs,

    #[command(flatten)]
    search: SearchArgs,

    #[command(flatten)]
    log: LogArgs,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&cli.log);

    let config = ProductSafeConfig {
        llm: LLMConfig::from(&cli.llm).with_api_key(cli.api_key.trim()),
        search: SearchConfig::from(&cli.search),
    };

    let client = reqwest::Client::builder()
        .user_agent(concat!("product-safe/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build HTTP client")?;
    let service = create_service(config, client)?;

    let source = ImageSource::parse(&cli.image);
    info!(image = %source, "Analyzing product");

    let report = service
        .analyze_product(AnalyzeProductInput::new(source))
        .await?;

    if cli.json {
        let rendered =
            serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{rendered}");
    } else {
        println!("{}", report.final_report);
    }
    Ok(())
}
