//! Error types for token issuance and verification.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors surfaced by token issuance and verification.
///
/// Every failure is reported as a typed variant; none are transient, so no
/// automatic retries happen anywhere in this crate.
#[derive(Error, Debug)]
pub enum TokenError {
    /// Token structure is invalid (segment count, encoding, or JSON shape).
    #[error("Token malformed: {reason}")]
    Malformed {
        /// Description of the malformation
        reason: String,
    },

    /// Recomputed HMAC does not match the token's signature segment.
    #[error("Token signature mismatch")]
    SignatureMismatch,

    /// Token has expired.
    #[error("Token expired at {expired_at}")]
    Expired {
        /// When the token expired
        expired_at: DateTime<Utc>,
    },

    /// Token header declares an algorithm this service does not accept.
    #[error("Unsupported algorithm: {algorithm}")]
    UnsupportedAlgorithm {
        /// Algorithm name from the token header
        algorithm: String,
    },

    /// Secure random source failed while generating a signing key.
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    /// Signing key is empty or too short for the chosen algorithm.
    #[error("Invalid signing key: {0}")]
    InvalidKey(String),

    /// Requested token lifetime is zero or negative.
    #[error("Invalid ttl: {0} seconds")]
    InvalidTtl(i64),

    /// Claims or header could not be serialized to JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TokenError {
    /// Create a `Malformed` error with the given reason.
    pub fn malformed(reason: impl Into<String>) -> Self {
        TokenError::Malformed {
            reason: reason.into(),
        }
    }

    /// Create an `UnsupportedAlgorithm` error for the given algorithm name.
    pub fn unsupported_algorithm(algorithm: impl Into<String>) -> Self {
        TokenError::UnsupportedAlgorithm {
            algorithm: algorithm.into(),
        }
    }

    /// Create an `InvalidKey` error with the given reason.
    pub fn invalid_key(reason: impl Into<String>) -> Self {
        TokenError::InvalidKey(reason.into())
    }

    /// Create a `Config` error with the given reason.
    pub fn config(reason: impl Into<String>) -> Self {
        TokenError::Config(reason.into())
    }
}

impl From<serde_json::Error> for TokenError {
    fn from(err: serde_json::Error) -> Self {
        TokenError::Serialization(err.to_string())
    }
}
