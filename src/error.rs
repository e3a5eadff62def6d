//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{service} API error (status {status}): {message}")]
    RemoteRequest {
        service: &'static str,
        status: u16,
        message: String,
    },
}

impl Error {
    /// HTTP status of a remote rejection, if that is what this error is.
    pub fn remote_status(&self) -> Option<u16> {
        match self {
            Error::RemoteRequest { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
