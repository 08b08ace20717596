//! Provider error types.
//!
//! These error types represent failures when talking to an LLM completion
//! endpoint. Defined in `tenlessons-core` so callers can downcast and
//! classify errors without string matching.

use thiserror::Error;

/// Errors that can occur when calling a completion provider.
///
/// Every call is attempted exactly once; none of these variants carries
/// retry hints because the session never retries.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Authentication failed (invalid API key).
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The API returned an error response (including rate limits).
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),
}

impl ProviderError {
    /// Returns `true` if this error indicates a bad or rejected credential.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ProviderError::AuthenticationFailed(_))
    }
}
