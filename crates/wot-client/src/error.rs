//! Error types for the WoT API client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Client built without an application key
    #[error("Application key cannot be empty")]
    MissingCredential,

    /// Network-level failure: DNS, connection refused, timeout
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body is not valid JSON or does not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid realm: {0}")]
    InvalidRealm(String),
}

impl Error {
    /// Create an invalid realm error
    pub fn invalid_realm(realm: impl Into<String>) -> Self {
        Self::InvalidRealm(realm.into())
    }

    /// Whether the error came from the HTTP transport
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Whether the error came from decoding the response body
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
