use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Session token lifetime: 5 hours
pub const SESSION_TOKEN_TTL: i64 = 18000;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "token";

/// Claims of a session token.
///
/// `user` is whatever identity payload the client supplied at login; the
/// only field the server interprets is `user.email`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub user: Value,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    /// `user.email`, when present and a string.
    pub fn email(&self) -> Option<&str> {
        self.user.get("email").and_then(Value::as_str)
    }
}

/// Issues and verifies HS256 session tokens
#[derive(Clone)]
pub struct SessionAuth {
    keys: Arc<Keys>,
    ttl_secs: i64,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionAuth {
    pub fn new(config: &JwtConfig) -> Self {
        let secret = config.secret.as_bytes();
        tracing::info!(ttl_secs = config.session_ttl_secs, "Session auth initialized");

        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret),
                decoding: DecodingKey::from_secret(secret),
            }),
            ttl_secs: config.session_ttl_secs,
        }
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Sign a token embedding `user`, valid for the configured TTL.
    pub fn issue(&self, user: Value) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = SessionClaims {
            user,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.ttl_secs)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
    }

    /// Check signature and expiry, then decode the claims.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        decode::<SessionClaims>(token, &self.keys.decoding, &validation).map(|data| data.claims)
    }
}

/// `Set-Cookie` value carrying a freshly issued session token.
pub fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    let secure = if secure { " Secure;" } else { "" };
    format!(
        "{SESSION_COOKIE}={token}; HttpOnly;{secure} SameSite=Lax; Path=/; Max-Age={max_age_secs}"
    )
}

/// `Set-Cookie` value that makes the browser drop the session cookie.
pub fn clear_session_cookie(secure: bool) -> String {
    session_cookie("", 0, secure)
}

/// First non-empty value of the cookie `name` in a `Cookie` header.
pub fn extract_cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|cookie| {
        let (key, value) = cookie.trim().split_once('=')?;
        (key == name && !value.is_empty()).then(|| value.to_string())
    })
}
