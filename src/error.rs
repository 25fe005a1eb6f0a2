//! Error types for the debugger core and its front ends

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, DebuggerError>;

#[derive(Debug, Error)]
pub enum DebuggerError {
    /// Variables may only hold natural numbers
    #[error("line {line}: variable '{name}' can only hold natural numbers, got {value}")]
    InvalidValue { name: String, value: i64, line: usize },

    #[error("line {line}: call to unknown function '{name}'")]
    UnknownFunction { name: String, line: usize },

    #[error("line {line}: malformed statement '{text}': {reason}")]
    MalformedLine {
        line: usize,
        text: String,
        reason: String,
    },

    #[error("line {line}: call depth limit of {limit} exceeded")]
    CallDepthExceeded { limit: usize, line: usize },

    #[error("invalid breakpoint command '{text}'")]
    InvalidBreakpoint { text: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl DebuggerError {
    pub fn malformed(line: usize, text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            text: text.into(),
            reason: reason.into(),
        }
    }

    /// True for failures caused by the loaded program rather than the console or environment
    pub fn is_program_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidValue { .. }
                | Self::UnknownFunction { .. }
                | Self::MalformedLine { .. }
                | Self::CallDepthExceeded { .. }
        )
    }
}
