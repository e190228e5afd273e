//! Configuration for the token-mint binary.
//!
//! All settings are loaded from environment variables with defaults that
//! reproduce the original demo token (admin subject, localhost issuer,
//! 1000 second lifetime).

use crate::error::TokenError;
use crate::jwt::HmacAlgorithm;
use std::env;
use std::str::FromStr;

/// Binary configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Issuer claim (`iss`)
    pub issuer: String,
    /// Subject claim (`sub`)
    pub subject: String,
    /// Token lifetime in seconds
    pub ttl_seconds: i64,
    /// Signing algorithm
    pub algorithm: HmacAlgorithm,
    /// Value for the `roles` custom claim
    pub roles: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, TokenError> {
        dotenvy::dotenv().ok();

        let issuer = env::var("TOKEN_ISSUER").unwrap_or_else(|_| "https://localhost".to_string());
        let subject = env::var("TOKEN_SUBJECT").unwrap_or_else(|_| "admin".to_string());
        let ttl_seconds = parse_env("TOKEN_TTL_SECS", 1000)?;
        let algorithm = match env::var("TOKEN_ALGORITHM") {
            Ok(s) => HmacAlgorithm::parse(&s)
                .map_err(|_| TokenError::config(format!("invalid TOKEN_ALGORITHM: {s}")))?,
            Err(_) => HmacAlgorithm::default(),
        };
        let roles = env::var("TOKEN_ROLES").unwrap_or_else(|_| "admin".to_string());

        if ttl_seconds <= 0 {
            return Err(TokenError::config(format!(
                "TOKEN_TTL_SECS must be positive, got {ttl_seconds}"
            )));
        }

        Ok(Config {
            issuer,
            subject,
            ttl_seconds,
            algorithm,
            roles,
        })
    }
}

fn parse_env<T: FromStr>(name: &str, default: T) -> Result<T, TokenError> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| TokenError::config(format!("invalid {name}: {value}"))),
        Err(_) => Ok(default),
    }
}
