//! Scripted adapters for exercising services without network access.

use std::sync::{Arc, Mutex};

use url::Url;

use crate::domain::{
    chat::{
        entities::{ChatTurn, ModelResponse, Role, ToolDefinition},
        ports::LLMClient,
    },
    common::{entities::app_errors::CoreError, services::Service},
    image::ports::ImageFetcher,
    prompt::{
        entities::PromptTemplate,
        templates::{FINAL_REPORT, REPORT, SEARCH_SUMMARY},
    },
    search::{entities::web_search_definition, ports::SearchTool},
};

/// Which pipeline invocation a recorded model call belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipelineStep {
    Vision,
    Report,
    SearchPlan,
    SearchSummary,
    FinalReport,
    Unknown,
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub turns: Vec<ChatTurn>,
    pub tools: Vec<ToolDefinition>,
}

impl RecordedCall {
    /// Text of the last turn.
    pub fn prompt(&self) -> String {
        self.turns.last().map(ChatTurn::text).unwrap_or_default()
    }

    pub fn step(&self) -> PipelineStep {
        let prompt = self.prompt();
        let rendered_from = |template: &PromptTemplate| {
            let prefix = template.template.split('{').next().unwrap_or_default();
            prompt.starts_with(prefix)
        };

        if self.turns.first().map(ChatTurn::role) == Some(Role::System) {
            PipelineStep::Vision
        } else if !self.tools.is_empty() {
            PipelineStep::SearchPlan
        } else if rendered_from(&REPORT) {
            PipelineStep::Report
        } else if rendered_from(&SEARCH_SUMMARY) {
            PipelineStep::SearchSummary
        } else if rendered_from(&FINAL_REPORT) {
            PipelineStep::FinalReport
        } else {
            PipelineStep::Unknown
        }
    }
}

type Responder = dyn Fn(&RecordedCall) -> Result<ModelResponse, CoreError> + Send + Sync;

/// LLM double that records every call and answers through a closure.
pub struct ScriptedLLM {
    calls: Mutex<Vec<RecordedCall>>,
    responder: Box<Responder>,
}

impl ScriptedLLM {
    pub fn replying(
        responder: impl Fn(&RecordedCall) -> Result<ModelResponse, CoreError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            responder: Box::new(responder),
        }
    }

    /// Answers every call with its own prompt text.
    pub fn echo() -> Self {
        Self::replying(|call| Ok(ModelResponse::text(call.prompt())))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Answer without recording.
    pub fn respond(&self, call: &RecordedCall) -> Result<ModelResponse, CoreError> {
        (self.responder)(call)
    }

    fn record(&self, call: RecordedCall) -> Result<ModelResponse, CoreError> {
        let response = self.respond(&call);
        self.calls.lock().unwrap().push(call);
        response
    }
}

impl Default for ScriptedLLM {
    fn default() -> Self {
        Self::echo()
    }
}

impl LLMClient for ScriptedLLM {
    async fn generate(&self, turns: Vec<ChatTurn>) -> Result<ModelResponse, CoreError> {
        self.record(RecordedCall {
            turns,
            tools: Vec::new(),
        })
    }

    async fn generate_with_tools(
        &self,
        turns: Vec<ChatTurn>,
        tools: Vec<ToolDefinition>,
    ) -> Result<ModelResponse, CoreError> {
        self.record(RecordedCall { turns, tools })
    }
}

type SearchResponder = dyn Fn(&str) -> Result<String, CoreError> + Send + Sync;

/// Search double that records queries.
pub struct StubSearchTool {
    queries: Mutex<Vec<String>>,
    responder: Box<SearchResponder>,
}

impl StubSearchTool {
    pub fn replying(
        responder: impl Fn(&str) -> Result<String, CoreError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            queries: Mutex::new(Vec::new()),
            responder: Box::new(responder),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl Default for StubSearchTool {
    fn default() -> Self {
        Self::replying(|query| Ok(format!("results for {query}")))
    }
}

impl SearchTool for StubSearchTool {
    fn definition(&self) -> ToolDefinition {
        web_search_definition()
    }

    async fn search(&self, query: String) -> Result<String, CoreError> {
        let response = (self.responder)(&query);
        self.queries.lock().unwrap().push(query);
        response
    }
}

#[derive(Clone, Default)]
pub struct FakeImageFetcher {
    response: Option<Result<Vec<u8>, CoreError>>,
    fetched: Arc<Mutex<Vec<Url>>>,
}

impl FakeImageFetcher {
    pub fn returning(data: Vec<u8>) -> Self {
        Self {
            response: Some(Ok(data)),
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Some(Err(CoreError::ImageFetch(message.to_string()))),
            ..Default::default()
        }
    }

    pub fn fetched(&self) -> Vec<Url> {
        self.fetched.lock().unwrap().clone()
    }
}

impl ImageFetcher for FakeImageFetcher {
    async fn fetch(&self, url: Url) -> Result<Vec<u8>, CoreError> {
        self.fetched.lock().unwrap().push(url.clone());
        self.response
            .clone()
            .unwrap_or_else(|| Err(CoreError::ImageFetch(format!("{url}: no stub configured"))))
    }
}

pub fn service_with(
    llm: ScriptedLLM,
    search: StubSearchTool,
) -> Service<ScriptedLLM, StubSearchTool, FakeImageFetcher> {
    Service::new(llm, search, FakeImageFetcher::default())
}
