use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Document {0} not found")]
    NotFound(ObjectId),

    #[error("Update body has no fields to set")]
    EmptyUpdate,

    #[error("Invalid document body: {0}")]
    InvalidBody(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type DocumentResult<T> = Result<T, DocumentError>;

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::NotFound(id) => AppError::NotFound(format!("Document {} not found", id)),
            DocumentError::EmptyUpdate => AppError::BadRequest(err.to_string()),
            DocumentError::InvalidBody(msg) => AppError::BadRequest(msg),
            DocumentError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for DocumentError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

impl From<mongodb::error::Error> for DocumentError {
    fn from(err: mongodb::error::Error) -> Self {
        DocumentError::Database(err.to_string())
    }
}
