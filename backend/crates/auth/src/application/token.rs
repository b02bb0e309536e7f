//! Token Service
//!
//! Issues and validates HS256 JWT access tokens carrying the caller's user id
//! and admin flag. Tokens are self-contained: no server-side state, no
//! refresh or revocation.
//!
//! Format: `base64url(header).base64url(claims).base64url(HMAC-SHA256)`

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};
use serde::Deserialize;

use crate::application::config::AuthConfig;
use crate::domain::value_object::identity::Identity;
use crate::error::{AuthError, AuthResult};

const ALGORITHM: &str = "HS256";

#[derive(Deserialize)]
struct Header {
    alg: String,
}

#[derive(Deserialize)]
struct Claims {
    user_id: i64,
    is_admin: bool,
    #[allow(dead_code)]
    iat: i64,
    exp: i64,
}

/// Signs and checks access tokens with a single process-wide key
pub struct TokenService {
    secret: [u8; 32],
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            secret: config.token_secret,
            ttl_secs: config.token_ttl_secs(),
        }
    }

    /// Issue a token valid from now until now + TTL
    pub fn issue(&self, user_id: UserId, is_admin: bool) -> String {
        self.issue_at(user_id, is_admin, Utc::now())
    }

    pub fn issue_at(&self, user_id: UserId, is_admin: bool, now: DateTime<Utc>) -> String {
        let iat = now.timestamp();
        let header = serde_json::json!({ "alg": ALGORITHM, "typ": "JWT" });
        let claims = serde_json::json!({
            "user_id": user_id.get(),
            "is_admin": is_admin,
            "iat": iat,
            "exp": iat.saturating_add(self.ttl_secs),
        });

        let signing_input = format!(
            "{}.{}",
            to_base64url(header.to_string().as_bytes()),
            to_base64url(claims.to_string().as_bytes())
        );
        let signature = hmac_sha256(&self.secret, signing_input.as_bytes());

        format!("{}.{}", signing_input, to_base64url(&signature))
    }

    /// Validate a token against the current time
    pub fn validate(&self, token: &str) -> AuthResult<Identity> {
        self.validate_at(token, Utc::now())
    }

    /// Validate a token
    ///
    /// The signature is checked before either JSON segment is parsed.
    /// Expired once `now >= exp`.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<Identity> {
        let mut segments = token.split('.');
        let (Some(header_b64), Some(claims_b64), Some(signature_b64), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(AuthError::InvalidToken);
        };

        let signature = from_base64url(signature_b64).map_err(|_| AuthError::InvalidToken)?;
        let signing_input = &token[..header_b64.len() + 1 + claims_b64.len()];

        if !verify_hmac_sha256(&self.secret, signing_input.as_bytes(), &signature) {
            return Err(AuthError::InvalidToken);
        }

        let header: Header = decode_segment(header_b64)?;
        if header.alg != ALGORITHM {
            return Err(AuthError::InvalidToken);
        }

        let claims: Claims = decode_segment(claims_b64)?;
        if now.timestamp() >= claims.exp {
            return Err(AuthError::InvalidToken);
        }

        Ok(Identity::new(UserId::new(claims.user_id), claims.is_admin))
    }
}

fn decode_segment<T: for<'de> Deserialize<'de>>(segment: &str) -> AuthResult<T> {
    let bytes = from_base64url(segment).map_err(|_| AuthError::InvalidToken)?;
    serde_json::from_slice(&bytes).map_err(|_| AuthError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn service() -> TokenService {
        TokenService::new(&AuthConfig::with_secret([7u8; 32]))
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_issue_then_validate() {
        let tokens = service();
        let token = tokens.issue_at(UserId::new(42), true, t0());

        let identity = tokens.validate_at(&token, t0()).unwrap();
        assert_eq!(identity.user_id, UserId::new(42));
        assert!(identity.is_admin);

        let identity = tokens
            .validate_at(&token, t0() + Duration::hours(23))
            .unwrap();
        assert!(identity.is_admin);
    }

    #[test]
    fn test_token_has_three_segments() {
        let token = service().issue(UserId::new(1), false);
        assert_eq!(token.split('.').count(), 3);
        assert!(!token.contains('='));
    }

    #[test]
    fn test_expiry_boundary() {
        let tokens = service();
        let token = tokens.issue_at(UserId::new(1), false, t0());

        let just_before = t0() + Duration::seconds(86_399);
        assert!(tokens.validate_at(&token, just_before).is_ok());

        let at_expiry = t0() + Duration::seconds(86_400);
        assert!(matches!(
            tokens.validate_at(&token, at_expiry),
            Err(AuthError::InvalidToken)
        ));
        assert!(tokens
            .validate_at(&token, at_expiry + Duration::days(30))
            .is_err());
    }

    #[test]
    fn test_custom_ttl() {
        let config = AuthConfig {
            token_ttl: std::time::Duration::from_secs(60),
            ..AuthConfig::with_secret([7u8; 32])
        };
        let tokens = TokenService::new(&config);
        let token = tokens.issue_at(UserId::new(1), false, t0());

        assert!(tokens.validate_at(&token, t0() + Duration::seconds(59)).is_ok());
        assert!(tokens.validate_at(&token, t0() + Duration::seconds(60)).is_err());
    }

    #[test]
    fn test_any_flipped_byte_invalidates() {
        let tokens = service();
        let token = tokens.issue_at(UserId::new(5), false, t0());

        for i in 0..token.len() {
            let mut bytes = token.clone().into_bytes();
            bytes[i] ^= 0x01;
            let tampered = String::from_utf8(bytes).unwrap();
            assert!(
                tokens.validate_at(&tampered, t0()).is_err(),
                "flipping byte {} was accepted",
                i
            );
        }
    }

    #[test]
    fn test_wrong_key_rejected() {
        let token = service().issue_at(UserId::new(5), true, t0());
        let other = TokenService::new(&AuthConfig::with_secret([8u8; 32]));
        assert!(other.validate_at(&token, t0()).is_err());
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        let tokens = service();
        for garbage in ["", "abc", "a.b", "a.b.c", "a.b.c.d", "...", "not a token"] {
            assert!(tokens.validate_at(garbage, t0()).is_err(), "{garbage:?}");
        }

        let token = tokens.issue_at(UserId::new(5), false, t0());
        assert!(tokens.validate_at(&format!("{token}.extra"), t0()).is_err());
    }

    #[test]
    fn test_other_algorithm_rejected() {
        let tokens = service();
        let header = to_base64url(br#"{"alg":"none","typ":"JWT"}"#);
        let claims = to_base64url(br#"{"user_id":1,"is_admin":true,"iat":0,"exp":9999999999}"#);
        let signing_input = format!("{header}.{claims}");
        let signature = to_base64url(&hmac_sha256(&[7u8; 32], signing_input.as_bytes()));

        let forged = format!("{signing_input}.{signature}");
        assert!(tokens.validate_at(&forged, t0()).is_err());
    }

    #[test]
    fn test_signed_but_malformed_claims_rejected() {
        let tokens = service();
        let header = to_base64url(br#"{"alg":"HS256","typ":"JWT"}"#);
        let claims = to_base64url(br#"{"user_id":"one"}"#);
        let signing_input = format!("{header}.{claims}");
        let signature = to_base64url(&hmac_sha256(&[7u8; 32], signing_input.as_bytes()));

        let token = format!("{signing_input}.{signature}");
        assert!(tokens.validate_at(&token, t0()).is_err());
    }
}
