//! Unified client error types.

use thiserror::Error;

/// Message shown to the user when the server gives us nothing better.
pub const FALLBACK_MESSAGE: &str = "An unknown error occurred";

/// Top-level client error.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl ClientError {
    /// User-facing message: the server-supplied detail where one exists,
    /// otherwise [`FALLBACK_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Http(e) => e.detail().unwrap_or(FALLBACK_MESSAGE).to_string(),
            ClientError::Validation(msg) => msg.clone(),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// 401 — the session has already been cleared and the redirect issued
    /// by the time this reaches the caller.
    #[error("unauthorized")]
    Unauthorized,

    /// Any other 4xx, carrying the server-supplied detail message.
    #[error("request denied ({status}): {detail}")]
    Denied { status: u16, detail: String },

    #[error("server error {status}: {body}")]
    ServerError { status: u16, body: String },

    /// 2xx response whose envelope held no `data` payload.
    #[error("response envelope carried no data")]
    MissingData,

    #[error("gave up after {attempts} attempts: {last_error}")]
    RetriesExhausted { attempts: u32, last_error: String },
}

impl HttpError {
    /// The server-supplied human-readable message, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            HttpError::Denied { detail, .. } if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }
}
