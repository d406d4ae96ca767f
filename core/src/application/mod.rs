use reqwest::Client;

use crate::{
    domain::common::{ProductSafeConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        image::HttpImageFetcher, llm::GeminiLLMClient, search::DuckDuckGoSearchTool,
    },
};

pub type ProductSafeService = Service<GeminiLLMClient, DuckDuckGoSearchTool, HttpImageFetcher>;

/// Wires the production adapters for one analysis.
///
/// `client` is the shared connection pool; the returned service owns the
/// credential in `config` and nothing else outlives it.
pub fn create_service(
    config: ProductSafeConfig,
    client: Client,
) -> Result<ProductSafeService, CoreError> {
    if config.llm.gemini_api_key.trim().is_empty() {
        return Err(CoreError::MissingInput("No API key provided".to_string()));
    }

    Ok(Service::new(
        GeminiLLMClient::new(config.llm, client.clone()),
        DuckDuckGoSearchTool::new(config.search, client.clone()),
        HttpImageFetcher::new(client),
    ))
}
