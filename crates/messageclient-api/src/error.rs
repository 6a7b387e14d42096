//! Client error type.

use thiserror::Error;

/// Errors surfaced by [`crate::Client`] operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Underlying transport I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The connection is gone; nothing more can be sent.
    #[error("connection closed")]
    Closed,
}
