//! Compact JOSE header.

use crate::error::TokenError;
use crate::jwt::HmacAlgorithm;
use serde::{Deserialize, Serialize};

/// JOSE header carried in the first token segment.
///
/// The algorithm is kept as its wire name so that verification can
/// distinguish an unsupported algorithm from a malformed header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Header {
    /// Algorithm name (`HS256`, ...)
    pub alg: String,
    /// Token type, `JWT` when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
}

impl Header {
    /// Header for a token signed with the given algorithm.
    #[must_use]
    pub fn new(algorithm: HmacAlgorithm) -> Self {
        Header {
            alg: algorithm.as_str().to_string(),
            typ: Some("JWT".to_string()),
        }
    }

    /// Parse a decoded header segment.
    ///
    /// # Errors
    ///
    /// Returns `Malformed` for invalid JSON or a non-JWT `typ` value.
    pub fn from_json(bytes: &[u8]) -> Result<Self, TokenError> {
        let header: Header = serde_json::from_slice(bytes)
            .map_err(|e| TokenError::malformed(format!("invalid header: {e}")))?;

        // typ is optional per JOSE, but a present value must be JWT
        if let Some(typ) = &header.typ {
            if !typ.eq_ignore_ascii_case("JWT") {
                return Err(TokenError::malformed(format!("unexpected typ: {typ}")));
            }
        }

        Ok(header)
    }

    /// Resolve the declared algorithm, enforcing an exact match with the
    /// algorithm the verifier is configured for.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedAlgorithm` for anything outside the HS family or
    /// for an HS variant other than `expected`. This guards against
    /// algorithm-substitution attacks (`none`, asymmetric names, or a
    /// weaker HS variant).
    pub fn require_algorithm(&self, expected: HmacAlgorithm) -> Result<HmacAlgorithm, TokenError> {
        let declared = HmacAlgorithm::parse(&self.alg)?;
        if declared != expected {
            return Err(TokenError::unsupported_algorithm(&self.alg));
        }
        Ok(declared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_header_wire_form() {
        let header = Header::new(HmacAlgorithm::HS256);
        let json = serde_json::to_string(&header).unwrap();
        assert_eq!(json, r#"{"alg":"HS256","typ":"JWT"}"#);
    }

    #[test]
    fn test_parse_without_typ() {
        let header = Header::from_json(br#"{"alg":"HS256"}"#).unwrap();
        assert_eq!(header.alg, "HS256");
        assert_eq!(header.typ, None);
    }

    #[test]
    fn test_parse_rejects_wrong_typ() {
        let result = Header::from_json(br#"{"alg":"HS256","typ":"JWE"}"#);
        assert!(matches!(result, Err(TokenError::Malformed { .. })));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let result = Header::from_json(b"not json");
        assert!(matches!(result, Err(TokenError::Malformed { .. })));
    }

    #[test]
    fn test_require_algorithm_exact_match() {
        let header = Header::new(HmacAlgorithm::HS256);
        assert!(header.require_algorithm(HmacAlgorithm::HS256).is_ok());
    }

    #[test]
    fn test_require_algorithm_rejects_other_hs_variant() {
        let header = Header::new(HmacAlgorithm::HS384);
        let err = header.require_algorithm(HmacAlgorithm::HS256).unwrap_err();
        assert!(matches!(err, TokenError::UnsupportedAlgorithm { .. }));
    }

    #[test]
    fn test_require_algorithm_rejects_none() {
        let header = Header {
            alg: "none".to_string(),
            typ: Some("JWT".to_string()),
        };
        let err = header.require_algorithm(HmacAlgorithm::HS256).unwrap_err();
        assert!(matches!(
            err,
            TokenError::UnsupportedAlgorithm { algorithm } if algorithm == "none"
        ));
    }
}
