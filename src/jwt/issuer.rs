//! Token issuance.

use crate::error::TokenError;
use crate::jwt::claims::Claims;
use crate::jwt::header::Header;
use crate::jwt::{b64url_encode, HmacAlgorithm};
use crate::key::SigningKey;
use ring::hmac;
use tracing::debug;

/// Issues compact HMAC-signed tokens under a single key and algorithm.
///
/// Issuance is a pure function of the claims and the key; the issuer holds
/// no mutable state and may be shared freely across threads.
pub struct TokenIssuer {
    key: SigningKey,
    algorithm: HmacAlgorithm,
}

impl TokenIssuer {
    /// Create an issuer for the given key and algorithm.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` if the key is shorter than the algorithm
    /// requires.
    pub fn new(key: SigningKey, algorithm: HmacAlgorithm) -> Result<Self, TokenError> {
        if key.len() < algorithm.min_key_len() {
            return Err(TokenError::invalid_key(format!(
                "{} requires at least {} bytes, got {}",
                algorithm,
                algorithm.min_key_len(),
                key.len()
            )));
        }
        Ok(TokenIssuer { key, algorithm })
    }

    /// The algorithm this issuer signs with.
    #[must_use]
    pub fn algorithm(&self) -> HmacAlgorithm {
        self.algorithm
    }

    /// Issue a compact token for the given claims.
    ///
    /// Output is `base64url(header).base64url(payload).base64url(signature)`
    /// and always verifies under the same key before its expiration.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the claims cannot be encoded as JSON.
    pub fn issue(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);
        let header_b64 = b64url_encode(&serde_json::to_vec(&header)?);
        let payload_b64 = b64url_encode(&serde_json::to_vec(claims)?);

        let signing_input = format!("{header_b64}.{payload_b64}");
        let signature = self.sign(signing_input.as_bytes());

        debug!(
            alg = %self.algorithm,
            sub = %claims.sub,
            exp = claims.exp,
            "issued token"
        );

        Ok(format!("{signing_input}.{}", b64url_encode(&signature)))
    }

    fn sign(&self, data: &[u8]) -> Vec<u8> {
        let key = hmac::Key::new(self.algorithm.ring_algorithm(), self.key.as_bytes());
        hmac::sign(&key, data).as_ref().to_vec()
    }
}
