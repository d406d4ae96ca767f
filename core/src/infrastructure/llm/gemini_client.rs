use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{
    chat::{
        entities::{ChatTurn, ContentPart, ModelResponse, Role, ToolCallRequest, ToolDefinition},
        ports::LLMClient,
    },
    common::{LLMConfig, entities::app_errors::CoreError},
};

/// Gemini `generateContent` client. Holds one credential; build a new value
/// per analysis and share only the underlying [`Client`].
#[derive(Clone, Debug)]
pub struct GeminiLLMClient {
    config: LLMConfig,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct Tool {
    function_declarations: Vec<FunctionDeclaration>,
}

#[derive(Debug, Serialize)]
struct FunctionDeclaration {
    name: String,
    description: String,
    parameters: Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartResponse {
    #[serde(default)]
    text: Option<String>,
    #[serde(default, alias = "function_call")]
    function_call: Option<FunctionCallResponse>,
}

#[derive(Debug, Deserialize)]
struct FunctionCallResponse {
    name: String,
    #[serde(default)]
    args: Value,
}

impl GeminiLLMClient {
    pub fn new(config: LLMConfig, client: Client) -> Self {
        Self { config, client }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.gemini_base_url.trim_end_matches('/'),
            self.config.gemini_model
        )
    }

    fn build_request(turns: Vec<ChatTurn>, tools: Vec<ToolDefinition>) -> GeminiRequest {
        let mut system_parts = Vec::new();
        let mut contents = Vec::new();

        for turn in turns {
            let parts = turn
                .parts()
                .iter()
                .map(|part| match part {
                    ContentPart::Text(text) => Part::Text { text: text.clone() },
                    ContentPart::Image(image) => Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime_type.clone(),
                            data: image.data.clone(),
                        },
                    },
                })
                .collect::<Vec<_>>();

            match turn.role() {
                Role::System => system_parts.extend(parts),
                Role::User => contents.push(Content {
                    role: Some("user"),
                    parts,
                }),
            }
        }

        let tools = if tools.is_empty() {
            Vec::new()
        } else {
            vec![Tool {
                function_declarations: tools
                    .into_iter()
                    .map(|tool| FunctionDeclaration {
                        name: tool.name,
                        description: tool.description,
                        parameters: tool.parameters,
                    })
                    .collect(),
            }]
        };

        GeminiRequest {
            system_instruction: (!system_parts.is_empty()).then_some(Content {
                role: None,
                parts: system_parts,
            }),
            contents,
            tools,
        }
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<ModelResponse, CoreError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.gemini_api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        let content = gemini_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))?;

        let mut text_parts = Vec::new();
        let mut tool_calls = Vec::new();
        for part in content.parts {
            if let Some(text) = part.text {
                text_parts.push(text);
            }
            if let Some(call) = part.function_call {
                tool_calls.push(ToolCallRequest::new(call.name, call.args));
            }
        }

        Ok(ModelResponse::with_tool_calls(text_parts.join(""), tool_calls))
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate(&self, turns: Vec<ChatTurn>) -> Result<ModelResponse, CoreError> {
        self.call_gemini_api(Self::build_request(turns, Vec::new()))
            .await
    }

    async fn generate_with_tools(
        &self,
        turns: Vec<ChatTurn>,
        tools: Vec<ToolDefinition>,
    ) -> Result<ModelResponse, CoreError> {
        self.call_gemini_api(Self::build_request(turns, tools)).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    use super::*;
    use crate::domain::{image::entities::ImagePayload, search::entities::web_search_definition};

    const GENERATE_PATH: &str = "/v1beta/models/gemini-test:generateContent";

    fn client_for(server: &MockServer) -> GeminiLLMClient {
        let config = LLMConfig {
            gemini_api_key: "test-key".to_string(),
            gemini_model: "gemini-test".to_string(),
            gemini_base_url: server.uri(),
        };
        GeminiLLMClient::new(config, Client::new())
    }

    fn text_response(text: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
        }))
    }

    #[tokio::test]
    async fn test_generate_sends_system_instruction_and_inline_image() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", "test-key"))
            .respond_with(text_response("Product Name: TestChips"))
            .expect(1)
            .mount(&server)
            .await;

        let image = ImagePayload::new(b"jpeg".to_vec()).encode();
        let response = client_for(&server)
            .generate(vec![
                ChatTurn::system("persona"),
                ChatTurn::user_with_image("describe", image),
            ])
            .await
            .unwrap();

        assert_eq!(response, ModelResponse::text("Product Name: TestChips"));

        let requests = server.received_requests().await.unwrap();
        let body: Value = requests[0].body_json().unwrap();
        assert_eq!(body["system_instruction"]["parts"][0]["text"], "persona");
        assert_eq!(body["contents"].as_array().unwrap().len(), 1);
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "describe");
        assert_eq!(
            body["contents"][0]["parts"][1]["inline_data"]["mime_type"],
            "image/jpeg"
        );
        assert_eq!(body["contents"][0]["parts"][1]["inline_data"]["data"], "anBlZw==");
        assert!(body.get("tools").is_none());
    }

    #[tokio::test]
    async fn test_generate_with_tools_parses_function_calls() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [
                            { "functionCall": { "name": "duckduckgo_search", "args": { "query": "TestChips recall India" } } },
                            { "functionCall": { "name": "duckduckgo_search", "args": { "query": "160c ban EU" } } }
                        ]
                    }
                }]
            })))
            .mount(&server)
            .await;

        let response = client_for(&server)
            .generate_with_tools(vec![ChatTurn::user("plan")], vec![web_search_definition()])
            .await
            .unwrap();

        assert_eq!(response.text, "");
        assert_eq!(
            response.tool_calls,
            vec![
                ToolCallRequest::new("duckduckgo_search", json!({ "query": "TestChips recall India" })),
                ToolCallRequest::new("duckduckgo_search", json!({ "query": "160c ban EU" })),
            ]
        );

        let requests = server.received_requests().await.unwrap();
        let body: Value = requests[0].body_json().unwrap();
        assert_eq!(
            body["tools"][0]["function_declarations"][0]["name"],
            "duckduckgo_search"
        );
        assert!(body.get("system_instruction").is_none());
    }

    #[tokio::test]
    async fn test_missing_function_call_field_means_no_tool_calls() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(text_response("No recent advisories found"))
            .mount(&server)
            .await;

        let response = client_for(&server)
            .generate_with_tools(vec![ChatTurn::user("plan")], vec![web_search_definition()])
            .await
            .unwrap();

        assert!(!response.has_tool_calls());
        assert_eq!(response.text, "No recent advisories found");
    }

    #[tokio::test]
    async fn test_error_status_carries_provider_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(
                ResponseTemplate::new(400).set_body_string("API key not valid. Please pass a valid API key."),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate(vec![ChatTurn::user("hello")])
            .await
            .unwrap_err();

        match err {
            CoreError::ExternalServiceError(message) => {
                assert!(message.contains("400"));
                assert!(message.contains("API key not valid"));
                assert!(!message.contains("test-key"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_candidates_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate(vec![ChatTurn::user("hello")])
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::ExternalServiceError("No response from LLM".to_string())
        );
    }
}
