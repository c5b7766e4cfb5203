use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::DocumentResult;
use crate::models::{DeleteAck, Document, DocumentFields, InsertAck, UpdateAck};

/// Data access for one schema-less collection.
///
/// Every handler performs exactly one of these calls per request.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Every document, unfiltered, in natural order
    async fn list(&self) -> DocumentResult<Vec<Document>>;

    /// Document with the given id, if any
    async fn get(&self, id: ObjectId) -> DocumentResult<Option<Document>>;

    /// Store a new document under a fresh id
    async fn insert(&self, fields: DocumentFields) -> DocumentResult<InsertAck>;

    /// Merge `fields` into the document (`$set` semantics)
    async fn update(&self, id: ObjectId, fields: DocumentFields) -> DocumentResult<UpdateAck>;

    /// Remove the document; a missing id reports `deleted_count == 0`
    async fn delete(&self, id: ObjectId) -> DocumentResult<DeleteAck>;
}
