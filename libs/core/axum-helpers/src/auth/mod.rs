//! Session authentication and per-route access policies.
//!
//! - [`jwt`]: HS256 session tokens carried in the `token` cookie
//! - [`middleware`]: the access policy dispatcher and request extractors
//!
//! ```ignore
//! use axum_helpers::auth::{AccessPolicy, AccessPolicyExt, JwtConfig, SessionAuth};
//! use core_config::FromEnv;
//!
//! let auth = SessionAuth::new(&JwtConfig::from_env()?);
//! let routes = Router::new()
//!     .route("/registrations", get(list).access(&auth, AccessPolicy::Authenticated));
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::JwtConfig;
pub use jwt::{
    SESSION_COOKIE, SESSION_TOKEN_TTL, SessionAuth, SessionClaims, clear_session_cookie,
    extract_cookie_value, session_cookie,
};
pub use middleware::{
    AccessPolicy, AccessPolicyExt, Owner, PolicyGuard, Session, authenticate, authorize_owner,
    enforce_access_policy,
};
