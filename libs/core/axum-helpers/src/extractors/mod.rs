//! Custom extractors for Axum handlers.
//!
//! Both map their failures onto [`AppError`](crate::errors::AppError) so
//! rejections share the standard error body.

pub mod json_body;
pub mod object_id_path;

pub use json_body::JsonBody;
pub use object_id_path::ObjectIdPath;
