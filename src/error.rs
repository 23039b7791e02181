use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Script error on line {line}: {reason} ({text})")]
    ScriptError {
        line: usize,
        text: String,
        reason: String,
    },

    #[error("Usage error: {0}")]
    UsageError(String),
}
