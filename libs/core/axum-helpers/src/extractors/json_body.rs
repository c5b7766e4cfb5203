//! JSON body extractor with rejections in the standard error shape.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// Drop-in replacement for [`axum::Json`] on the request side.
///
/// Syntax and shape errors become `400`, a missing `Content-Type` becomes
/// `415`, both rendered through [`AppError`].
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request as HttpRequest, StatusCode, header},
        routing::post,
    };
    use serde_json::{Map, Value};
    use tower::ServiceExt;

    async fn keys(JsonBody(body): JsonBody<Map<String, Value>>) -> String {
        body.len().to_string()
    }

    async fn post_raw(body: &'static str, content_type: Option<&str>) -> StatusCode {
        let mut request = HttpRequest::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            request = request.header(header::CONTENT_TYPE, content_type);
        }

        Router::new()
            .route("/", post(keys))
            .oneshot(request.body(Body::from(body)).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_accepts_object() {
        assert_eq!(
            post_raw(r#"{"title":"Rust meetup"}"#, Some("application/json")).await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_non_object_is_bad_request() {
        assert_eq!(
            post_raw("[1,2,3]", Some("application/json")).await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_invalid_json_is_bad_request() {
        assert_eq!(
            post_raw("{title:", Some("application/json")).await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_missing_content_type_is_unsupported() {
        assert_eq!(
            post_raw("{}", None).await,
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }
}
