//! Compact JWT issuance and verification.

pub mod algorithm;
pub mod builder;
pub mod claims;
pub mod header;
pub mod issuer;
pub mod verifier;

pub use algorithm::HmacAlgorithm;
pub use builder::TokenBuilder;
pub use claims::Claims;
pub use header::Header;
pub use issuer::TokenIssuer;
pub use verifier::TokenVerifier;

use crate::error::TokenError;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

pub(crate) fn b64url_encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

pub(crate) fn b64url_decode(segment: &str, what: &str) -> Result<Vec<u8>, TokenError> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| TokenError::malformed(format!("invalid base64url in {what}: {e}")))
}
