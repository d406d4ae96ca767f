use std::future::Future;

use crate::domain::{chat::entities::ToolDefinition, common::entities::app_errors::CoreError};

/// Web search provider dispatched for model tool calls.
#[cfg_attr(test, mockall::automock)]
pub trait SearchTool: Send + Sync {
    /// Declaration bound to the model so it can request searches.
    fn definition(&self) -> ToolDefinition;

    /// Runs one query and returns the provider's raw text.
    fn search(&self, query: String) -> impl Future<Output = Result<String, CoreError>> + Send;
}
