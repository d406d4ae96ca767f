use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Error loading image: {0}")]
    ImageRead(String),

    #[error("Error loading image: {0}")]
    ImageFetch(String),

    #[error("{0}")]
    MissingInput(String),

    #[error("{0}")]
    ExternalServiceError(String),

    #[error("Search provider error: {0}")]
    SearchError(String),

    #[error("Invalid tool call: {0}")]
    InvalidToolCall(String),

    #[error("Missing value for template variable '{0}'")]
    MissingTemplateVariable(String),
}

impl CoreError {
    /// True for failures caused by the caller's input rather than an upstream service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, CoreError::MissingInput(_))
    }
}
