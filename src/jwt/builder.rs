//! Builder for token claims.

use crate::error::TokenError;
use crate::jwt::claims::Claims;
use std::collections::BTreeMap;

/// Builder assembling the claims for a single token.
pub struct TokenBuilder {
    issuer: String,
    subject: Option<String>,
    ttl_seconds: i64,
    custom_claims: BTreeMap<String, serde_json::Value>,
}

impl TokenBuilder {
    /// Start building claims for the given issuer.
    #[must_use]
    pub fn new(issuer: String) -> Self {
        TokenBuilder {
            issuer,
            subject: None,
            ttl_seconds: 900, // 15 minutes default
            custom_claims: BTreeMap::new(),
        }
    }

    /// Set the subject claim.
    #[must_use]
    pub fn subject(mut self, subject: String) -> Self {
        self.subject = Some(subject);
        self
    }

    /// Set the token lifetime in seconds.
    #[must_use]
    pub fn ttl_seconds(mut self, ttl: i64) -> Self {
        self.ttl_seconds = ttl;
        self
    }

    /// Add a custom claim.
    #[must_use]
    pub fn claim(mut self, key: String, value: serde_json::Value) -> Self {
        self.custom_claims.insert(key, value);
        self
    }

    /// Build the claims, stamping the expiration from the current time.
    ///
    /// # Errors
    ///
    /// Returns `Malformed` if the subject is missing and `InvalidTtl` for a
    /// zero or negative lifetime.
    pub fn build(self) -> Result<Claims, TokenError> {
        let subject = self
            .subject
            .ok_or_else(|| TokenError::malformed("subject is required"))?;

        if self.ttl_seconds <= 0 {
            return Err(TokenError::InvalidTtl(self.ttl_seconds));
        }

        let mut claims = Claims::new(self.issuer, subject, self.ttl_seconds);

        for (key, value) in self.custom_claims {
            claims = claims.with_claim(key, value);
        }

        Ok(claims)
    }
}
