use std::sync::Arc;

use productsafe_core::domain::common::ProductSafeConfig;
use reqwest::Client;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    /// Connection pool shared by every request; credentials are never stored here.
    pub http_client: Client,
}

impl AppState {
    pub fn new(args: Arc<Args>, http_client: Client) -> Self {
        Self { args, http_client }
    }

    /// Analysis settings for one request, carrying that request's API key.
    pub fn config_for(&self, api_key: &str) -> ProductSafeConfig {
        let mut config = ProductSafeConfig::from(self.args.as_ref());
        config.llm = config.llm.with_api_key(api_key);
        config
    }
}
