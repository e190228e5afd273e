//! Symmetric signing algorithms.

use crate::error::TokenError;
use ring::hmac;

/// HMAC signing algorithm for tokens.
///
/// Only the symmetric HS family is supported; any other algorithm name in a
/// token header (including `none` and the asymmetric families) is rejected
/// at verification time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HmacAlgorithm {
    /// HMAC with SHA-256
    HS256,
    /// HMAC with SHA-384
    HS384,
    /// HMAC with SHA-512
    HS512,
}

impl HmacAlgorithm {
    /// Parse an algorithm from its JOSE header name.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedAlgorithm` for any name outside the HS family.
    pub fn parse(s: &str) -> Result<Self, TokenError> {
        match s {
            "HS256" => Ok(Self::HS256),
            "HS384" => Ok(Self::HS384),
            "HS512" => Ok(Self::HS512),
            other => Err(TokenError::unsupported_algorithm(other)),
        }
    }

    /// Algorithm name for the JWT header.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HS256 => "HS256",
            Self::HS384 => "HS384",
            Self::HS512 => "HS512",
        }
    }

    /// Minimum key length in bytes (the underlying hash output size).
    #[must_use]
    pub const fn min_key_len(&self) -> usize {
        match self {
            Self::HS256 => 32,
            Self::HS384 => 48,
            Self::HS512 => 64,
        }
    }

    pub(crate) fn ring_algorithm(&self) -> hmac::Algorithm {
        match self {
            Self::HS256 => hmac::HMAC_SHA256,
            Self::HS384 => hmac::HMAC_SHA384,
            Self::HS512 => hmac::HMAC_SHA512,
        }
    }
}

impl Default for HmacAlgorithm {
    fn default() -> Self {
        Self::HS256
    }
}

impl std::fmt::Display for HmacAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
