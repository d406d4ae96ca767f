/// Holds the adapters one analysis runs against.
///
/// Domain services are implemented as trait impls on this struct, one file
/// per domain, so every port stays swappable in tests.
#[derive(Clone, Debug)]
pub struct Service<LLM, S, F> {
    pub(crate) llm_client: LLM,
    pub(crate) search_tool: S,
    pub(crate) image_fetcher: F,
}

impl<LLM, S, F> Service<LLM, S, F> {
    pub fn new(llm_client: LLM, search_tool: S, image_fetcher: F) -> Self {
        Self {
            llm_client,
            search_tool,
            image_fetcher,
        }
    }
}
