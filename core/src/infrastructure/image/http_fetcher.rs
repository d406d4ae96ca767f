use reqwest::Client;
use url::Url;

use crate::domain::{common::entities::app_errors::CoreError, image::ports::ImageFetcher};

/// Downloads product photos with a single buffered GET.
#[derive(Debug, Clone)]
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: Url) -> Result<Vec<u8>, CoreError> {
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            tracing::error!(%url, "Image download failed: {}", e);
            CoreError::ImageFetch(format!("{}: {}", url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(%url, %status, "Image download returned an error status");
            return Err(CoreError::ImageFetch(format!("{} returned {}", url, status)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CoreError::ImageFetch(format!("{}: {}", url, e)))?;

        Ok(bytes.to_vec())
    }
}
