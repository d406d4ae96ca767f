use std::future::Future;

use tracing::{debug, instrument};

use crate::domain::{
    chat::ports::LLMClient,
    common::{entities::app_errors::CoreError, services::Service},
    image::{
        entities::{ImagePayload, ImageSource},
        ports::ImageFetcher,
    },
    search::ports::SearchTool,
};

/// Image Ingestor: turns any supported source into an in-memory payload.
pub trait ImageIngestService: Send + Sync {
    fn load_image(
        &self,
        source: ImageSource,
    ) -> impl Future<Output = Result<ImagePayload, CoreError>> + Send;
}

impl<LLM, S, F> ImageIngestService for Service<LLM, S, F>
where
    LLM: LLMClient,
    S: SearchTool,
    F: ImageFetcher,
{
    #[instrument(skip(self, source), fields(source = %source))]
    async fn load_image(&self, source: ImageSource) -> Result<ImagePayload, CoreError> {
        let data = match source {
            ImageSource::Path(path) => tokio::fs::read(&path).await.map_err(|e| {
                CoreError::ImageRead(format!("{}: {}", path.display(), e))
            })?,
            ImageSource::Url(url) => self.image_fetcher.fetch(url).await?,
            ImageSource::Bytes(data) => data,
        };

        debug!(size = data.len(), "Image loaded");

        Ok(ImagePayload::new(data))
    }
}
