use reqwest::Client;
use scraper::{ElementRef, Html, Selector};

use crate::domain::{
    chat::entities::ToolDefinition,
    common::{SearchConfig, entities::app_errors::CoreError},
    search::{entities::web_search_definition, ports::SearchTool},
};

/// Returned when a query yields no parsable results.
pub const NO_RESULTS: &str = "No good DuckDuckGo Search Result was found";

const USER_AGENT: &str = "Mozilla/5.0 (compatible; ProductSafe/0.1; +https://duckduckgo.com)";

/// Web search over the DuckDuckGo HTML endpoint. Needs no API key.
#[derive(Debug, Clone)]
pub struct DuckDuckGoSearchTool {
    config: SearchConfig,
    client: Client,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SearchHit {
    title: String,
    snippet: String,
    url: String,
}

impl DuckDuckGoSearchTool {
    pub fn new(config: SearchConfig, client: Client) -> Self {
        Self { config, client }
    }

    fn endpoint(&self) -> String {
        format!("{}/html/", self.config.base_url.trim_end_matches('/'))
    }
}

impl SearchTool for DuckDuckGoSearchTool {
    fn definition(&self) -> ToolDefinition {
        web_search_definition()
    }

    async fn search(&self, query: String) -> Result<String, CoreError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("User-Agent", USER_AGENT)
            .form(&[("q", query.as_str())])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("DuckDuckGo request failed: {}", e);
                CoreError::SearchError(format!("Search request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(%status, query = %query, "DuckDuckGo returned an error status");
            return Err(CoreError::SearchError(format!(
                "Search API returned error: {}",
                status
            )));
        }

        let body = response.text().await.map_err(|e| {
            CoreError::SearchError(format!("Failed to read search results: {}", e))
        })?;

        let hits = parse_results(&body, self.config.max_results)?;
        tracing::debug!(query = %query, hits = hits.len(), "DuckDuckGo search complete");

        Ok(format_results(&hits))
    }
}

fn selector(css: &'static str) -> Result<Selector, CoreError> {
    Selector::parse(css).map_err(|e| CoreError::SearchError(format!("Invalid selector {css}: {e}")))
}

fn element_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join("")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_results(body: &str, max_results: usize) -> Result<Vec<SearchHit>, CoreError> {
    let document = Html::parse_document(body);
    let result_selector = selector(".result")?;
    let title_selector = selector(".result__a")?;
    let snippet_selector = selector(".result__snippet")?;
    let url_selector = selector(".result__url")?;

    let hits = document
        .select(&result_selector)
        .filter_map(|result| {
            let snippet = result.select(&snippet_selector).next().map(element_text)?;
            if snippet.is_empty() {
                return None;
            }
            let title = result
                .select(&title_selector)
                .next()
                .map(element_text)
                .unwrap_or_default();
            let url = result
                .select(&url_selector)
                .next()
                .map(element_text)
                .unwrap_or_default();

            Some(SearchHit {
                title,
                snippet,
                url,
            })
        })
        .take(max_results)
        .collect();

    Ok(hits)
}

fn format_results(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return NO_RESULTS.to_string();
    }

    hits.iter()
        .map(|hit| {
            if hit.url.is_empty() {
                format!("{}: {}", hit.title, hit.snippet)
            } else {
                format!("{}: {} [{}]", hit.title, hit.snippet, hit.url)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_string_contains, method, path},
    };

    use super::*;

    const RESULTS_PAGE: &str = r#"
        <html><body>
          <div class="result results_links">
            <a class="result__a" href="https://fssai.gov.in/a">FSSAI advisory on   snacks</a>
            <a class="result__url" href="https://fssai.gov.in/a">fssai.gov.in/a</a>
            <a class="result__snippet">Advisory on <b>E160c</b> usage in extruded snacks.</a>
          </div>
          <div class="result results_links">
            <a class="result__a" href="https://example.com/b">No snippet here</a>
          </div>
          <div class="result results_links">
            <a class="result__a" href="https://efsa.europa.eu/c">EFSA opinion</a>
            <a class="result__snippet">Paprika extract re-evaluation.</a>
          </div>
        </body></html>
    "#;

    #[test]
    fn test_parse_results_skips_entries_without_snippet() {
        let hits = parse_results(RESULTS_PAGE, 10).unwrap();

        assert_eq!(
            hits,
            vec![
                SearchHit {
                    title: "FSSAI advisory on snacks".to_string(),
                    snippet: "Advisory on E160c usage in extruded snacks.".to_string(),
                    url: "fssai.gov.in/a".to_string(),
                },
                SearchHit {
                    title: "EFSA opinion".to_string(),
                    snippet: "Paprika extract re-evaluation.".to_string(),
                    url: String::new(),
                },
            ]
        );
    }

    #[test]
    fn test_parse_results_respects_max_results() {
        let hits = parse_results(RESULTS_PAGE, 1).unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_format_results_empty_page() {
        let hits = parse_results("<html><body></body></html>", 5).unwrap();
        assert_eq!(format_results(&hits), NO_RESULTS);
    }

    #[tokio::test]
    async fn test_search_posts_query_and_formats_hits() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/html/"))
            .and(body_string_contains("q=TestChips+recall+India"))
            .respond_with(ResponseTemplate::new(200).set_body_string(RESULTS_PAGE))
            .expect(1)
            .mount(&server)
            .await;

        let tool = DuckDuckGoSearchTool::new(
            SearchConfig {
                base_url: server.uri(),
                max_results: 5,
            },
            Client::new(),
        );

        let output = tool.search("TestChips recall India".to_string()).await.unwrap();

        assert!(output.contains("FSSAI advisory on snacks: Advisory on E160c usage"));
        assert!(output.contains("[fssai.gov.in/a]"));
        assert!(output.contains("EFSA opinion: Paprika extract re-evaluation."));
    }

    #[tokio::test]
    async fn test_search_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/html/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let tool = DuckDuckGoSearchTool::new(
            SearchConfig {
                base_url: server.uri(),
                max_results: 5,
            },
            Client::new(),
        );

        let err = tool.search("anything".to_string()).await.unwrap_err();
        assert!(matches!(err, CoreError::SearchError(message) if message.contains("503")));
    }
}
