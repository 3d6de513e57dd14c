//! Error types for framewire.

use thiserror::Error;

/// Main error type for all framewire operations.
#[derive(Debug, Error)]
pub enum FramewireError {
    /// I/O error during socket operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error (payload codec).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Protocol error (unparsable length header, oversized body, etc.).
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Connection closed unexpectedly.
    #[error("Connection closed")]
    ConnectionClosed,
}

/// Result type alias using FramewireError.
pub type Result<T> = std::result::Result<T, FramewireError>;
