//! Session issuance: `POST /jwt` and `POST /logout`.
//!
//! Login performs no credential check. Whatever `user` payload the frontend
//! sends is signed into the `token` cookie; logout only asks the browser to
//! drop it, so an issued token stays valid until it expires.

use axum::{
    Json, Router,
    extract::State,
    http::header,
    response::IntoResponse,
    routing::post,
};
use axum_helpers::{
    AccessPolicy, AccessPolicyExt, AppError, JsonBody, SessionAuth,
    auth::{clear_session_cookie, session_cookie},
    errors::responses::{BadRequestBodyResponse, InternalServerErrorResponse},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{OpenApi, ToSchema};

#[derive(OpenApi)]
#[openapi(
    paths(login, logout),
    components(schemas(LoginRequest, SessionAck)),
    tags((name = "Session", description = "Cookie session issuance"))
)]
pub struct SessionApiDoc;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Identity to sign; `user.email` scopes owner routes
    #[schema(value_type = Object, example = json!({"email": "ana@example.com"}))]
    pub user: Value,
}

/// `{"Success": "..."}` acknowledgment the frontends look for
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionAck {
    #[serde(rename = "Success")]
    pub success: &'static str,
}

#[derive(Clone)]
struct SessionState {
    auth: SessionAuth,
    secure_cookie: bool,
}

/// Login and logout routes; `secure_cookie` adds `Secure` to `Set-Cookie`.
pub fn router(auth: &SessionAuth, secure_cookie: bool) -> Router {
    let state = SessionState {
        auth: auth.clone(),
        secure_cookie,
    };

    Router::new()
        .route("/jwt", post(login).access(auth, AccessPolicy::Public))
        .route("/logout", post(logout).access(auth, AccessPolicy::Public))
        .with_state(state)
}

/// Sign the supplied user into a session cookie
#[utoipa::path(
    post,
    path = "/jwt",
    tag = "Session",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session cookie set", body = SessionAck,
            headers(("Set-Cookie" = String, description = "token=<jwt>; HttpOnly; SameSite=Lax; Path=/; Max-Age=18000"))),
        (status = 400, response = BadRequestBodyResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn login(
    State(state): State<SessionState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.user.is_null() {
        return Err(AppError::BadRequest("user is required".to_string()));
    }

    let token = state
        .auth
        .issue(request.user)
        .map_err(|e| AppError::InternalServerError(format!("failed to sign session: {e}")))?;

    tracing::info!("Session issued");

    let cookie = session_cookie(&token, state.auth.ttl_secs(), state.secure_cookie);
    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(SessionAck {
            success: "Token sent",
        }),
    ))
}

/// Ask the browser to drop the session cookie
#[utoipa::path(
    post,
    path = "/logout",
    tag = "Session",
    responses(
        (status = 200, description = "Session cookie cleared", body = SessionAck)
    )
)]
async fn logout(State(state): State<SessionState>) -> impl IntoResponse {
    (
        [(header::SET_COOKIE, clear_session_cookie(state.secure_cookie))],
        Json(SessionAck {
            success: "Logged out",
        }),
    )
}
