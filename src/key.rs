//! Symmetric signing key material.

use crate::error::TokenError;
use crate::jwt::HmacAlgorithm;
use base64::Engine;
use ring::rand::{SecureRandom, SystemRandom};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Opaque symmetric signing key.
///
/// Generated once from a cryptographically secure source and shared
/// read-only between issuers and verifiers. Never persisted alongside the
/// tokens it signs. Key bytes are zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SigningKey {
    bytes: Vec<u8>,
}

impl SigningKey {
    /// Generate a fresh key sized for the given algorithm.
    ///
    /// # Errors
    ///
    /// Returns `KeyGeneration` if the system entropy source fails.
    pub fn generate(algorithm: HmacAlgorithm) -> Result<Self, TokenError> {
        let mut bytes = vec![0u8; algorithm.min_key_len()];
        SystemRandom::new()
            .fill(&mut bytes)
            .map_err(|_| TokenError::KeyGeneration("entropy source unavailable".to_string()))?;
        Ok(SigningKey { bytes })
    }

    /// Wrap existing key bytes, enforcing the algorithm's minimum length.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` if the material is empty or shorter than the
    /// algorithm requires.
    pub fn from_bytes(bytes: Vec<u8>, algorithm: HmacAlgorithm) -> Result<Self, TokenError> {
        if bytes.is_empty() {
            return Err(TokenError::invalid_key("key is empty"));
        }
        if bytes.len() < algorithm.min_key_len() {
            return Err(TokenError::invalid_key(format!(
                "{} requires at least {} bytes, got {}",
                algorithm,
                algorithm.min_key_len(),
                bytes.len()
            )));
        }
        Ok(SigningKey { bytes })
    }

    /// Raw key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Key length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the key is empty. Cannot be true for a constructed key.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Standard base64 encoding of the key, for sharing out of band.
    #[must_use]
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }
}

// Key material never appears in logs or debug output.
impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}
