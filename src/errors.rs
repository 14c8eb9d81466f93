use thiserror::Error;

/// Errors that can occur while serving documentation.
///
/// These are transport-agnostic; the MCP layer decides which protocol error
/// code each one maps to.
#[derive(Error, Debug)]
pub enum DocsError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("file error: {message} (path: {path})")]
    File { message: String, path: String },

    #[error("architecture file not found for '{component}': {path}")]
    ArchitectureMissing { component: String, path: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DocsError {
    /// Shorthand for an [`DocsError::InvalidArgument`] with the given message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Convenience alias for results using `DocsError`.
pub type Result<T> = std::result::Result<T, DocsError>;
