use axum::{Router, extract::State, response::Response, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use mongodb::Client;

/// `GET /`, the plain-text liveness probe the frontends ping.
pub fn liveness_router() -> Router {
    Router::new().route("/", get(hello))
}

/// `GET /ready`, which pings MongoDB.
pub fn readiness_router(client: Client) -> Router {
    Router::new()
        .route("/ready", get(readiness))
        .with_state(client)
}

async fn hello() -> &'static str {
    "Hello World"
}

async fn readiness(State(client): State<Client>) -> Response {
    let mongodb: HealthCheckFuture = Box::pin(async {
        database::mongodb::ping(&client)
            .await
            .map_err(|e| e.to_string())
    });

    run_health_checks(vec![("mongodb", mongodb)]).await
}
