//! Command log errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("log file error: {0}")]
    Io(#[from] std::io::Error),
}
