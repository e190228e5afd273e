//! Property-based tests for token integrity.

use proptest::prelude::*;
use token_mint::{
    Claims, HmacAlgorithm, SigningKey, TokenBuilder, TokenError, TokenIssuer, TokenVerifier,
};

/// Custom claim names that do not collide with the reserved fields.
fn arb_claim_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}"
        .prop_filter("reserved claim", |s| !matches!(s.as_str(), "iss" | "sub" | "exp"))
}

fn arb_claim_value() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        "[ -~]{0,40}".prop_map(serde_json::Value::from),
        any::<i64>().prop_map(serde_json::Value::from),
        any::<bool>().prop_map(serde_json::Value::from),
    ]
}

fn arb_claims() -> impl Strategy<Value = Claims> {
    (
        "[ -~]{1,30}",
        "[ -~]{1,30}",
        1i64..1_000_000,
        prop::collection::btree_map(arb_claim_name(), arb_claim_value(), 0..5),
    )
        .prop_map(|(issuer, subject, ttl, custom)| {
            let mut builder = TokenBuilder::new(issuer)
                .subject(subject)
                .ttl_seconds(ttl);
            for (key, value) in custom {
                builder = builder.claim(key, value);
            }
            builder.build().unwrap()
        })
}

fn hs256_key(seed: u8) -> SigningKey {
    SigningKey::from_bytes(vec![seed; 32], HmacAlgorithm::HS256).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any claims issued under a key verify under the same key before
    /// expiration, returning the claims unchanged.
    #[test]
    fn prop_round_trip(claims in arb_claims()) {
        let key = hs256_key(0x42);
        let issuer = TokenIssuer::new(key.clone(), HmacAlgorithm::HS256).unwrap();
        let verifier = TokenVerifier::new(key, HmacAlgorithm::HS256).unwrap();

        let token = issuer.issue(&claims).unwrap();
        let verified = verifier.verify(&token).unwrap();
        prop_assert_eq!(verified, claims);
    }

    /// Flipping any bit of any character in a valid token makes
    /// verification fail. Flips are restricted to the low seven bits so
    /// the token stays valid UTF-8.
    #[test]
    fn prop_bit_flip_rejected(claims in arb_claims(), position in any::<prop::sample::Index>(), bit in 0u8..7) {
        let key = hs256_key(0x42);
        let issuer = TokenIssuer::new(key.clone(), HmacAlgorithm::HS256).unwrap();
        let verifier = TokenVerifier::new(key, HmacAlgorithm::HS256).unwrap();

        let token = issuer.issue(&claims).unwrap();
        let mut bytes = token.clone().into_bytes();
        let index = position.index(bytes.len());
        bytes[index] ^= 1 << bit;
        let tampered = String::from_utf8(bytes).unwrap();
        prop_assume!(tampered != token);

        let result = verifier.verify_at(&tampered, chrono::Utc::now().timestamp());
        prop_assert!(matches!(
            result,
            Err(TokenError::SignatureMismatch)
                | Err(TokenError::Malformed { .. })
                | Err(TokenError::UnsupportedAlgorithm { .. })
        ), "unexpected result: {:?}", result);
    }

    /// A token issued under key A never verifies under a different key B.
    #[test]
    fn prop_wrong_key_rejected(claims in arb_claims(), seed_a in any::<u8>(), seed_b in any::<u8>()) {
        prop_assume!(seed_a != seed_b);

        let issuer = TokenIssuer::new(hs256_key(seed_a), HmacAlgorithm::HS256).unwrap();
        let verifier = TokenVerifier::new(hs256_key(seed_b), HmacAlgorithm::HS256).unwrap();

        let token = issuer.issue(&claims).unwrap();
        let result = verifier.verify(&token);
        prop_assert!(matches!(result, Err(TokenError::SignatureMismatch)));
    }

    /// Verification at or after the expiration timestamp always fails
    /// with Expired; strictly before, it succeeds.
    #[test]
    fn prop_expiry_boundary(claims in arb_claims(), skew in 0i64..10_000) {
        let key = hs256_key(0x42);
        let issuer = TokenIssuer::new(key.clone(), HmacAlgorithm::HS256).unwrap();
        let verifier = TokenVerifier::new(key, HmacAlgorithm::HS256).unwrap();

        let token = issuer.issue(&claims).unwrap();

        prop_assert!(verifier.verify_at(&token, claims.exp - 1).is_ok());
        let result = verifier.verify_at(&token, claims.exp + skew);
        prop_assert!(matches!(result, Err(TokenError::Expired { .. })), "unexpected result: {:?}", result);
    }
}
