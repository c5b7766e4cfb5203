use axum::body::Body;
use axum::http::{Request, StatusCode};
use events_api::api::health;
use http_body_util::BodyExt;
use mongodb::Client;
use serde_json::Value;
use tower::ServiceExt;

#[tokio::test]
async fn test_ready_reports_unreachable_mongodb() {
    let client = Client::with_uri_str("mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200")
        .await
        .unwrap();

    let response = health::readiness_router(client)
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "not ready");
    assert_eq!(body["mongodb"], "disconnected");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_ready_with_mongodb_container() {
    let mongo = test_utils::TestMongo::new().await;

    let response = health::readiness_router(mongo.client())
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
