//! Transport-level error type.

use thiserror::Error;

/// Errors returned by a text provider's `fetch_raw_text`.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The provider rejected our credentials (HTTP 401).
    #[error("text provider rejected the bot token (check PROTALK_BOT_TOKEN)")]
    Unauthorized,

    /// The provider could not understand the request (HTTP 400).
    #[error("text provider rejected the request as malformed")]
    BadRequest,

    /// Any other non-success status from the provider.
    #[error("text provider error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Connection-level failure before a response arrived.
    #[error("text provider transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered but the payload was unusable.
    #[error("text provider returned a malformed response: {0}")]
    Other(String),
}
