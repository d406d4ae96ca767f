use std::future::Future;

use crate::domain::{
    chat::entities::{ChatTurn, ModelResponse, ToolDefinition},
    common::entities::app_errors::CoreError,
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Plain completion over a conversation.
    fn generate(
        &self,
        turns: Vec<ChatTurn>,
    ) -> impl Future<Output = Result<ModelResponse, CoreError>> + Send;

    /// Completion with tools bound; the response may carry tool calls.
    fn generate_with_tools(
        &self,
        turns: Vec<ChatTurn>,
        tools: Vec<ToolDefinition>,
    ) -> impl Future<Output = Result<ModelResponse, CoreError>> + Send;
}
