//! Error types for roledoc-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from roledoc-core
    #[error(transparent)]
    Core(#[from] roledoc_core::Error),

    /// Error from roledoc-blocks (marker configuration)
    #[error(transparent)]
    Blocks(#[from] roledoc_blocks::Error),

    /// Invalid invocation, reported before any file is touched
    #[error("{message}")]
    Usage { message: String },
}

impl CliError {
    /// Create a new usage error with the given message
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } | Self::Blocks(_) => 2,
            Self::Core(_) => 1,
        }
    }
}
