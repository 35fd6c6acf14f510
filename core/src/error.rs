//! Error types for the poll API client.
//!
//! # Design
//! Every failure carries a kind that callers can branch on without looking
//! at message text. A request that never got a response is a
//! `Transport` error; a response outside the 2xx range is `HttpStatus`
//! with the raw status and body kept for the caller.

use std::fmt;

/// What went wrong below HTTP: no response was ever received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// Connection refused, host not found, timed out, socket I/O.
    Network,
    /// Anything else the HTTP library reported (bad URL, TLS, protocol).
    Unknown,
}

/// A request that failed before any response arrived.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: TransportErrorKind::Network,
            message: message.into(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            kind: TransportErrorKind::Unknown,
            message: message.into(),
        }
    }
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportErrorKind::Network => write!(f, "network error"),
            TransportErrorKind::Unknown => write!(f, "unknown error"),
        }
    }
}

/// Coarse classification of an `ApiError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NetworkError,
    HttpStatusError,
    Decode,
    Encode,
}

/// Errors returned by `PollClient` and `ApiService`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No response reached the client.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a status outside `200..300`.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Transport(_) => ErrorKind::NetworkError,
            ApiError::HttpStatus { .. } => ErrorKind::HttpStatusError,
            ApiError::Deserialization(_) => ErrorKind::Decode,
            ApiError::Serialization(_) => ErrorKind::Encode,
        }
    }

    /// Status code of the offending response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw body of the offending response, if one was received.
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::HttpStatus { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
