//! token-mint library.
//!
//! Symmetric JWT issuance and verification: HMAC-signed compact tokens
//! with a typed error taxonomy. `TokenIssuer` and `TokenVerifier` are pure
//! and hold no mutable state; a `SigningKey` is read-only after generation
//! and may be shared across threads without synchronization.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod jwt;
pub mod key;

// Re-exports for convenience
pub use config::Config;
pub use error::TokenError;
pub use jwt::{Claims, HmacAlgorithm, TokenBuilder, TokenIssuer, TokenVerifier};
pub use key::SigningKey;
