use super::jwt::{SESSION_COOKIE, SessionAuth, SessionClaims, extract_cookie_value};
use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query, Request, State},
    http::{HeaderMap, Uri, header, request::Parts},
    middleware::{self, Next},
    response::Response,
    routing::MethodRouter,
};
use serde::Deserialize;

pub const TOKEN_REQUIRED: &str = "A token is required for authentication";
pub const INVALID_TOKEN: &str = "Invalid token";
pub const NOT_AUTHORIZED: &str = "Not authorized";

/// Access requirement declared on a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// No credential needed
    Public,
    /// A valid session token is required
    Authenticated,
    /// A valid session token whose `user.email` the request may act for
    Owner,
}

/// Identity an owner-scoped request is limited to, taken from the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub email: String,
}

/// State handed to [`enforce_access_policy`] for one route.
#[derive(Clone)]
pub struct PolicyGuard {
    auth: SessionAuth,
    policy: AccessPolicy,
}

impl PolicyGuard {
    pub fn new(auth: SessionAuth, policy: AccessPolicy) -> Self {
        Self { auth, policy }
    }
}

#[derive(Deserialize)]
struct OwnerQuery {
    email: Option<String>,
}

/// Verify the session cookie and decode its claims.
pub fn authenticate(auth: &SessionAuth, headers: &HeaderMap) -> Result<SessionClaims, AppError> {
    let token = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|cookies| extract_cookie_value(cookies, SESSION_COOKIE))
        .ok_or_else(|| {
            tracing::debug!("No session cookie on request");
            AppError::Unauthorized(TOKEN_REQUIRED.to_string())
        })?;

    auth.verify(&token).map_err(|e| {
        tracing::debug!("Session token rejected: {}", e);
        AppError::Unauthorized(INVALID_TOKEN.to_string())
    })
}

/// Resolve the owner identity for a verified session.
///
/// The identity is always the claim's `user.email`. An `email` query
/// parameter is accepted only as an assertion that must match it.
pub fn authorize_owner(claims: &SessionClaims, uri: &Uri) -> Result<Owner, AppError> {
    let forbidden = || AppError::Forbidden(NOT_AUTHORIZED.to_string());

    let email = claims.email().ok_or_else(|| {
        tracing::debug!("Session has no user.email claim");
        forbidden()
    })?;

    let Query(requested) = Query::<OwnerQuery>::try_from_uri(uri)
        .map_err(|e| AppError::BadRequest(e.body_text()))?;

    match requested.email {
        Some(requested) if requested != email => {
            tracing::debug!(requested = %requested, "Requested email does not match session");
            Err(forbidden())
        }
        _ => Ok(Owner {
            email: email.to_string(),
        }),
    }
}

/// Single dispatcher for per-route access policies.
///
/// On success the decoded [`SessionClaims`] (and, for owner routes, the
/// [`Owner`]) are placed in request extensions.
pub async fn enforce_access_policy(
    State(guard): State<PolicyGuard>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match guard.policy {
        AccessPolicy::Public => {}
        AccessPolicy::Authenticated => {
            let claims = authenticate(&guard.auth, request.headers())?;
            request.extensions_mut().insert(claims);
        }
        AccessPolicy::Owner => {
            let claims = authenticate(&guard.auth, request.headers())?;
            let owner = authorize_owner(&claims, request.uri())?;
            request.extensions_mut().insert(claims);
            request.extensions_mut().insert(owner);
        }
    }

    Ok(next.run(request).await)
}

/// Declare the access policy of a route.
///
/// ```ignore
/// use axum::{Router, routing::get};
/// use axum_helpers::auth::{AccessPolicy, AccessPolicyExt};
///
/// let router = Router::new()
///     .route("/events", get(list).access(&auth, AccessPolicy::Public))
///     .route("/events/{id}", put(update).access(&auth, AccessPolicy::Owner));
/// ```
pub trait AccessPolicyExt {
    fn access(self, auth: &SessionAuth, policy: AccessPolicy) -> Self;
}

impl<S> AccessPolicyExt for MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn access(self, auth: &SessionAuth, policy: AccessPolicy) -> Self {
        self.route_layer(middleware::from_fn_with_state(
            PolicyGuard::new(auth.clone(), policy),
            enforce_access_policy,
        ))
    }
}

/// Claims of the verified session on the current request.
pub struct Session(pub SessionClaims);

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionClaims>()
            .cloned()
            .map(Session)
            .ok_or_else(|| AppError::Unauthorized(TOKEN_REQUIRED.to_string()))
    }
}

impl<S> FromRequestParts<S> for Owner
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Owner>()
            .cloned()
            .ok_or_else(|| AppError::Forbidden(NOT_AUTHORIZED.to_string()))
    }
}
