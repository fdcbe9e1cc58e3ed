//! Error types for table sessions.

use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors that can occur during a table session.
#[derive(Debug, Error)]
pub enum TableError {
    /// The dice engine rejected an operation.
    #[error("{0}")]
    Engine(#[from] nd_engine::EngineError),

    /// Unknown command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Invalid argument or usage.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// No preset matches the given name or number.
    #[error("no preset named '{0}'")]
    UnknownPreset(String),

    /// The requested history entry does not exist.
    #[error("no roll #{0} in history")]
    NoHistory(usize),

    /// Reading configuration from disk failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
