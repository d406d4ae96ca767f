use tracing::{info, warn};

use crate::domain::{
    chat::entities::ToolCallRequest,
    common::entities::app_errors::CoreError,
    search::{entities::QUERY_ARG, ports::SearchTool},
};

/// Separator between raw results of one dispatch round.
pub const SEARCH_RESULT_SEPARATOR: &str = ", ";

/// Runs every requested search once, in the order the model returned them.
pub async fn dispatch_tool_calls<S: SearchTool>(
    search_tool: &S,
    tool_calls: &[ToolCallRequest],
) -> Result<Vec<String>, CoreError> {
    let expected = search_tool.definition().name;
    let mut results = Vec::with_capacity(tool_calls.len());

    for (index, call) in tool_calls.iter().enumerate() {
        if call.name != expected {
            warn!(tool = %call.name, expected = %expected, "Model called an unknown tool, dispatching to search");
        }

        let query = call.string_arg(QUERY_ARG).ok_or_else(|| {
            CoreError::InvalidToolCall(format!(
                "{} call is missing a string '{}' argument",
                call.name, QUERY_ARG
            ))
        })?;

        info!(index, query, "Dispatching web search");
        results.push(search_tool.search(query.to_string()).await?);
    }

    Ok(results)
}

pub fn join_search_results(results: &[String]) -> String {
    results.join(SEARCH_RESULT_SEPARATOR)
}
