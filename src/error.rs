use thiserror::Error;

/// Every recoverable failure in the core. The read loop prints the display
/// string and keeps going; nothing here terminates the process.
///
/// Variants that wrap a `String` carry a caller-supplied message, so the same
/// parsing primitive can report command-specific wording (the delete handler
/// and the mark handler both fail on a bad index, with different text).
#[derive(Error, Debug)]
pub enum TasklineError {
    #[error("Input cannot be empty. Please enter a valid command.")]
    EmptyInput,

    #[error("I'm sorry, but I don't know what that means.")]
    UnknownCommand,

    #[error("{0}")]
    MissingField(String),

    #[error("{0}")]
    InvalidDateTime(String),

    #[error("{0}")]
    InvalidDate(String),

    #[error("{0}")]
    InvalidTaskNumber(String),

    #[error("{0}")]
    InvalidReminderWindow(String),

    #[error("Corrupted data file: {0}")]
    CorruptedData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TasklineError>;
