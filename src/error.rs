use miette::Diagnostic;
use thiserror::Error;

/// Main error type for strokepad operations
#[derive(Error, Diagnostic, Debug)]
pub enum PadError {
    #[error("IO error: {0}")]
    #[diagnostic(code(strokepad::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(strokepad::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Decode error: {message}")]
    #[diagnostic(code(strokepad::decode))]
    Decode {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(strokepad::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(strokepad::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl PadError {
    /// Shorthand for a decode failure without help text.
    pub fn decode(message: impl Into<String>) -> Self {
        PadError::Decode {
            message: message.into(),
            help: None,
        }
    }

    /// Whether this error came from a malformed drawing stream.
    pub fn is_decode(&self) -> bool {
        matches!(self, PadError::Decode { .. })
    }
}

pub type Result<T> = std::result::Result<T, PadError>;
