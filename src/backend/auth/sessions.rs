/**
 * Session Management and JWT Tokens
 *
 * This module handles token generation and validation. Tokens are HS512
 * JWTs carrying the username (`name`) and the numeric user id as a string
 * (`nameid`), and are validated for signature, issuer, audience, and expiry.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::shared::config::TokenSettings;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Username
    pub name: String,
    /// User ID, as a decimal string
    pub nameid: String,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Numeric user id, if the `nameid` claim parses as one
    pub fn user_id(&self) -> Option<i64> {
        self.nameid.parse().ok()
    }
}

/// Create a JWT token for a user, valid for `settings.ttl_minutes`
pub fn create_token(
    settings: &TokenSettings,
    user_id: i64,
    username: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    create_token_at(settings, user_id, username, Utc::now().timestamp())
}

/// Create a JWT token as if issued at `issued_at` (Unix seconds)
pub fn create_token_at(
    settings: &TokenSettings,
    user_id: i64,
    username: &str,
    issued_at: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        name: username.to_string(),
        nameid: user_id.to_string(),
        iss: settings.issuer.clone(),
        aud: settings.audience.clone(),
        exp: issued_at + Duration::minutes(settings.ttl_minutes).num_seconds(),
        iat: issued_at,
    };

    sign_claims(settings, &claims)
}

/// Sign arbitrary claims with the configured secret
pub fn sign_claims(
    settings: &TokenSettings,
    claims: &Claims,
) -> Result<String, jsonwebtoken::errors::Error> {
    let key = EncodingKey::from_secret(settings.secret.as_bytes());
    encode(&Header::new(Algorithm::HS512), claims, &key)
}

/// Verify and decode a JWT token
pub fn verify_token(
    settings: &TokenSettings,
    token: &str,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(settings.secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS512);
    validation.set_issuer(&[settings.issuer.as_str()]);
    validation.set_audience(&[settings.audience.as_str()]);

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}
