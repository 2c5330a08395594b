//! JWT Token handling
//!
//! Two token kinds share the signing secret: short-lived access tokens
//! for API auth, and single-purpose email verification tokens carrying a
//! `purpose` claim so one can never stand in for the other.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT configuration
#[derive(Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Access token expiration time in hours
    pub expiration_hours: i64,
    /// Email verification token expiration time in hours
    pub verification_expiration_hours: i64,
    /// Issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "super-secret-key-change-in-production".to_string(),
            expiration_hours: 24,
            verification_expiration_hours: 48,
            issuer: "texnouz-ijara".to_string(),
        }
    }
}

/// Access token claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Username
    pub username: String,
    /// User role
    pub role: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Issuer
    pub iss: String,
}

impl TokenClaims {
    pub fn new(user_id: &str, username: &str, role: &str, config: &JwtConfig) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(config.expiration_hours);

        Self {
            sub: user_id.to_string(),
            username: username.to_string(),
            role: role.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: config.issuer.clone(),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Create an access token for a user
pub fn create_token(
    user_id: &str,
    username: &str,
    role: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let token_claims = TokenClaims::new(user_id, username, role, config);

    encode(
        &Header::default(),
        &token_claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify and decode an access token
pub fn verify_token(
    token: &str,
    config: &JwtConfig,
) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.set_issuer(&[&config.issuer]);

    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

const EMAIL_VERIFICATION_PURPOSE: &str = "email-verify";

/// Email verification token claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct VerificationClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Email address the token was issued for
    pub email: String,
    /// Fixed purpose marker; rejects access tokens used as links
    pub purpose: String,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
}

/// Create a signed email verification token
pub fn create_verification_token(
    user_id: &str,
    email: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = VerificationClaims {
        sub: user_id.to_string(),
        email: email.to_string(),
        purpose: EMAIL_VERIFICATION_PURPOSE.to_string(),
        exp: (now + Duration::hours(config.verification_expiration_hours)).timestamp(),
        iat: now.timestamp(),
        iss: config.issuer.clone(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify an email verification token and return its claims.
///
/// Fails when the signature, issuer or expiry is invalid, or when the
/// token was not issued for email verification.
pub fn verify_verification_token(
    token: &str,
    config: &JwtConfig,
) -> Result<VerificationClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.set_issuer(&[&config.issuer]);

    let token_data = decode::<VerificationClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;

    if token_data.claims.purpose != EMAIL_VERIFICATION_PURPOSE {
        return Err(jsonwebtoken::errors::ErrorKind::InvalidToken.into());
    }

    Ok(token_data.claims)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            ..JwtConfig::default()
        }
    }

    #[test]
    fn access_token_round_trip() {
        let config = test_config();
        let token = create_token("user-1", "alice", "admin", &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.username, "alice");
        assert!(claims.is_admin());
        assert!(!claims.is_expired());
    }

    #[test]
    fn verification_token_round_trip() {
        let config = test_config();
        let token = create_verification_token("user-1", "alice@example.com", &config).unwrap();
        let claims = verify_verification_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.email, "alice@example.com");
    }

    #[test]
    fn access_token_is_not_a_verification_token() {
        let config = test_config();
        let token = create_token("user-1", "alice", "admin", &config).unwrap();
        assert!(verify_verification_token(&token, &config).is_err());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let config = test_config();
        let token = create_token("user-1", "alice", "admin", &config).unwrap();
        let other = JwtConfig {
            secret: "other-secret".to_string(),
            ..JwtConfig::default()
        };
        assert!(verify_token(&token, &other).is_err());
    }
}
