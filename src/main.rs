//! token-mint binary.
//!
//! Generates a fresh signing key, issues one token, and prints the token
//! followed by the base64-encoded shared secret. Logs go to stderr so
//! stdout stays machine-readable.

use anyhow::Result;
use token_mint::{Config, SigningKey, TokenBuilder, TokenIssuer};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(alg = %config.algorithm, issuer = %config.issuer, "issuing token");

    let key = SigningKey::generate(config.algorithm)?;

    let claims = TokenBuilder::new(config.issuer)
        .subject(config.subject)
        .ttl_seconds(config.ttl_seconds)
        .claim("roles".to_string(), serde_json::json!(config.roles))
        .build()?;

    let issuer = TokenIssuer::new(key.clone(), config.algorithm)?;
    let token = issuer.issue(&claims)?;

    println!("Token:");
    println!("{token}");
    println!("Shared secret:");
    println!("{}", key.to_base64());

    Ok(())
}
