use miette::Diagnostic;
use thiserror::Error;

/// Main error type for dotgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum DotgenError {
    #[error("IO error: {0}")]
    #[diagnostic(code(dotgen::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(dotgen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(dotgen::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Failed to encode {state} as {format}: {message}")]
    #[diagnostic(code(dotgen::encode))]
    Encode {
        state: String,
        format: String,
        message: String,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(dotgen::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, DotgenError>;

impl DotgenError {
    /// Attach a state name to an encode error raised below the generator.
    pub fn for_state(self, name: &str) -> Self {
        match self {
            DotgenError::Encode { format, message, .. } => DotgenError::Encode {
                state: name.to_string(),
                format,
                message,
            },
            other => other,
        }
    }
}
