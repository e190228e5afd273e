//! Token verification.

use crate::error::TokenError;
use crate::jwt::claims::Claims;
use crate::jwt::header::Header;
use crate::jwt::{b64url_decode, HmacAlgorithm};
use crate::key::SigningKey;
use ring::hmac;
use subtle::ConstantTimeEq;
use tracing::debug;

/// Verifies compact HMAC-signed tokens under a single key and algorithm.
///
/// Each call is a pure function of the token and the clock; the verifier
/// holds no mutable state and may be shared freely across threads.
pub struct TokenVerifier {
    key: SigningKey,
    algorithm: HmacAlgorithm,
}

impl TokenVerifier {
    /// Create a verifier for the given key and algorithm.
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
        Ok(TokenVerifier { key, algorithm })
    }

    /// Verify a token against the real clock and return its claims.
    ///
    /// # Errors
    ///
    /// `Malformed` for structural problems, `UnsupportedAlgorithm` if the
    /// header declares anything but this verifier's algorithm,
    /// `SignatureMismatch` for a wrong key or tampered content, and
    /// `Expired` once the expiration has passed.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, chrono::Utc::now().timestamp())
    }

    /// Verify a token as of the given Unix timestamp.
    ///
    /// Validation is staged: structure, then algorithm, then signature, and
    /// only then is the payload parsed and the expiration checked. The
    /// payload is never interpreted before the signature has authenticated
    /// it.
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let (header_b64, payload_b64, signature_b64) = split_token(token)?;

        let header = Header::from_json(&b64url_decode(header_b64, "header")?)?;
        header.require_algorithm(self.algorithm)?;

        let signature = b64url_decode(signature_b64, "signature")?;
        let signing_input = format!("{header_b64}.{payload_b64}");
        let expected = self.sign(signing_input.as_bytes());

        if !bool::from(expected.ct_eq(&signature)) {
            debug!(alg = %self.algorithm, "signature mismatch");
            return Err(TokenError::SignatureMismatch);
        }

        let claims: Claims = serde_json::from_slice(&b64url_decode(payload_b64, "payload")?)
            .map_err(|e| TokenError::malformed(format!("invalid payload: {e}")))?;

        if !claims.is_valid_at(now) {
            return Err(TokenError::Expired {
                expired_at: chrono::DateTime::from_timestamp(claims.exp, 0)
                    .unwrap_or_else(chrono::Utc::now),
            });
        }

        Ok(claims)
    }

    /// Decode the payload without verifying the signature or expiration.
    ///
    /// For logging and diagnostics only; never trust the result.
    ///
    /// # Errors
    ///
    /// Returns `Malformed` for structural problems.
    pub fn decode_unverified(token: &str) -> Result<Claims, TokenError> {
        let (_, payload_b64, _) = split_token(token)?;
        serde_json::from_slice(&b64url_decode(payload_b64, "payload")?)
            .map_err(|e| TokenError::malformed(format!("invalid payload: {e}")))
    }

    fn sign(&self, data: &[u8]) -> Vec<u8> {
        let key = hmac::Key::new(self.algorithm.ring_algorithm(), self.key.as_bytes());
        hmac::sign(&key, data).as_ref().to_vec()
    }
}

fn split_token(token: &str) -> Result<(&str, &str, &str), TokenError> {
    let mut segments = token.split('.');
    match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(h), Some(p), Some(s), None) if !h.is_empty() && !p.is_empty() && !s.is_empty() => {
            Ok((h, p, s))
        }
        _ => Err(TokenError::malformed("expected 3 non-empty segments")),
    }
}
