//! Application error types.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Discord error: {0}")]
    Discord(#[from] discord_client::DiscordError),

    #[error("Dispatch error: {0}")]
    Dispatch(#[from] command_dispatch::DispatchError),

    #[error("Command log error: {0}")]
    Log(#[from] command_log::LogError),
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
