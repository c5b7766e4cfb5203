//! # Axum Helpers
//!
//! Shared HTTP plumbing for the event registration services.
//!
//! - **[`auth`]**: cookie-carried JWT sessions and per-route access policies
//! - **[`server`]**: router assembly, health checks, graceful shutdown
//! - **[`http`]**: CORS and security headers
//! - **[`errors`]**: structured error responses with error codes
//! - **[`extractors`]**: ObjectId path and JSON body extractors
//!
//! ```ignore
//! use axum_helpers::{CorsConfig, build_router, create_production_app};
//!
//! let router = build_router::<ApiDoc>(routes, &CorsConfig::default())?;
//! create_production_app(router, &server_config, Duration::from_secs(30), async {}).await?;
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use auth::{
    AccessPolicy, AccessPolicyExt, JwtConfig, Owner, SESSION_TOKEN_TTL, Session, SessionAuth,
    SessionClaims,
};

pub use server::{
    HealthCheckFuture, HealthResponse, build_router, create_production_app, health_router,
    run_health_checks, serve_until, shutdown_signal,
};

pub use http::{CorsConfig, create_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{JsonBody, ObjectIdPath};
