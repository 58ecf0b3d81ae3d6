use std::io;
use thiserror::Error;

/// Errors surfaced by the dashboard outside of rendering.
#[derive(Error, Debug)]
pub enum DashError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DashError>;

impl DashError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        DashError::Config(msg.into())
    }
}
