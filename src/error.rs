use thiserror::Error;

/// Errors that can occur while playing
#[derive(Error, Debug)]
pub enum GameError {
    /// The player pressed Ctrl+C at a prompt
    #[error("interrupted")]
    Interrupted,

    /// The input stream ended before the player quit
    #[error("input closed")]
    InputClosed,

    /// Failed to read a line from the player
    #[error("failed to read input: {0}")]
    InputError(#[source] std::io::Error),

    /// Failed to write game output
    #[error("failed to write output: {0}")]
    OutputError(#[source] std::io::Error),

    /// Failed to listen for Ctrl+C
    #[error("failed to install Ctrl+C handler: {0}")]
    SignalError(#[source] std::io::Error),
}

/// Result type alias for game operations
pub type Result<T> = std::result::Result<T, GameError>;
