//! Document Service - one repository call per operation

use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{DocumentError, DocumentResult};
use crate::models::{DeleteAck, Document, DocumentFields, InsertAck, UpdateAck};
use crate::repository::DocumentRepository;

pub struct DocumentService<R: DocumentRepository> {
    repository: Arc<R>,
}

impl<R: DocumentRepository> DocumentService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> DocumentResult<Vec<Document>> {
        self.repository.list().await
    }

    /// Fetch one document; a missing id is [`DocumentError::NotFound`].
    #[instrument(skip(self))]
    pub async fn get(&self, id: ObjectId) -> DocumentResult<Document> {
        self.repository
            .get(id)
            .await?
            .ok_or(DocumentError::NotFound(id))
    }

    #[instrument(skip(self, fields))]
    pub async fn create(&self, fields: DocumentFields) -> DocumentResult<InsertAck> {
        self.repository.insert(fields).await
    }

    /// Merge `fields` into a document.
    ///
    /// A body with nothing left to set is rejected without touching the store.
    #[instrument(skip(self, fields))]
    pub async fn update(&self, id: ObjectId, fields: DocumentFields) -> DocumentResult<UpdateAck> {
        if fields.is_empty() {
            return Err(DocumentError::EmptyUpdate);
        }

        self.repository.update(id, fields).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: ObjectId) -> DocumentResult<DeleteAck> {
        self.repository.delete(id).await
    }
}

impl<R: DocumentRepository> Clone for DocumentService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
