// ABOUTME: Defines all error types for tooldispatch using thiserror.
// ABOUTME: Each concern has its own error enum, unified under Error.

/// Top-level error type for the tooldispatch library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors from registry construction and dispatch.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Duplicate tool name: {0}")]
    DuplicateName(String),

    #[error("Invalid tool definition: {0}")]
    InvalidDefinition(String),

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// Failure raised by the tool itself, passed through untouched.
    #[error(transparent)]
    Execution(anyhow::Error),
}

impl ToolError {
    /// Returns the tool's own error when this is an execution failure.
    pub fn execution_error(&self) -> Option<&anyhow::Error> {
        match self {
            Self::Execution(err) => Some(err),
            _ => None,
        }
    }
}

/// Errors from feed retrieval.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed returned status {0}")]
    Status(u16),
}

/// Errors from chart rendering.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}
