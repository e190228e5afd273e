//! Token claims.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Claims carried in the token payload.
///
/// Custom claims are flattened into the payload next to the reserved
/// fields. They live in a `BTreeMap` so the compact JSON is canonical and
/// issuance is deterministic for identical inputs and timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Issuer (`iss`)
    pub iss: String,
    /// Subject (`sub`)
    pub sub: String,
    /// Expiration as a Unix timestamp in seconds (`exp`)
    pub exp: i64,

    /// Custom claims
    #[serde(flatten)]
    pub custom: BTreeMap<String, serde_json::Value>,
}

impl Claims {
    /// Claims expiring `ttl_seconds` from now.
    pub fn new(issuer: String, subject: String, ttl_seconds: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        Claims {
            iss: issuer,
            sub: subject,
            exp: now + ttl_seconds,
            custom: BTreeMap::new(),
        }
    }

    /// Add a custom claim.
    #[must_use]
    pub fn with_claim(mut self, key: String, value: serde_json::Value) -> Self {
        self.custom.insert(key, value);
        self
    }

    /// Look up a custom claim by name.
    pub fn claim(&self, key: &str) -> Option<&serde_json::Value> {
        self.custom.get(key)
    }

    /// Whether the claims have expired against the real clock.
    pub fn is_expired(&self) -> bool {
        !self.is_valid_at(chrono::Utc::now().timestamp())
    }

    /// Whether the claims are valid at the given Unix timestamp.
    pub fn is_valid_at(&self, timestamp: i64) -> bool {
        timestamp < self.exp
    }
}
