use serde_json::json;

use crate::domain::chat::entities::ToolDefinition;

/// Tool name the search-planning prompt refers to.
pub const WEB_SEARCH_TOOL: &str = "duckduckgo_search";

/// Argument carrying the query in a search tool call.
pub const QUERY_ARG: &str = "query";

/// Literal reported for targets without findings.
pub const NO_ADVISORIES_FOUND: &str = "No recent advisories found";

pub fn web_search_definition() -> ToolDefinition {
    ToolDefinition {
        name: WEB_SEARCH_TOOL.to_string(),
        description: "A wrapper around DuckDuckGo Search. Useful for answering questions about \
                      current events, recalls, bans and health advisories. Input should be a \
                      search query."
            .to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "search query to look up"
                }
            },
            "required": ["query"]
        }),
    }
}
