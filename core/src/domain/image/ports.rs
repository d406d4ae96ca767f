use std::future::Future;

use url::Url;

use crate::domain::common::entities::app_errors::CoreError;

/// Downloads remote images for the ingestor.
#[cfg_attr(test, mockall::automock)]
pub trait ImageFetcher: Send + Sync {
    fn fetch(&self, url: Url) -> impl Future<Output = Result<Vec<u8>, CoreError>> + Send;
}
