//! Error types.

use std::path::PathBuf;
use thiserror::Error;

/// Failure running an external command.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Failed to execute command: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Command exited with code {code:?}: {stderr}")]
    Failed { code: Option<i32>, stderr: String },

    #[error("Response too large: {0} bytes")]
    OutputTooLarge(usize),

    #[error("Invalid UTF-8 in command output: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Errors raised while inspecting DNS forwarding configuration.
#[derive(Error, Debug)]
pub enum InspectorError {
    /// The inventory service could not be reached or refused the request.
    #[error("Inventory lookup failed ({operation}): {source}")]
    Inventory {
        operation: String,
        #[source]
        source: CommandError,
    },

    /// A required field is absent or a resource path cannot be parsed.
    #[error("Malformed resource: {0}")]
    MalformedResource(String),

    #[error("Cache file {path:?}: {message}")]
    Cache { path: PathBuf, message: String },

    #[error("Listing worker failed: {0}")]
    Worker(String),

    #[error("Logger initialization error: {0}")]
    Logging(String),
}

impl InspectorError {
    pub fn inventory(operation: impl Into<String>, source: CommandError) -> Self {
        InspectorError::Inventory {
            operation: operation.into(),
            source,
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        InspectorError::MalformedResource(message.into())
    }
}
