//! In-memory implementation of DocumentRepository.
//!
//! Backs router tests and local runs without a MongoDB deployment. State is
//! lost on restart and is not shared between processes. Documents keep
//! insertion order, matching what `list` returns from a fresh MongoDB
//! collection.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::DocumentResult;
use crate::models::{DeleteAck, Document, DocumentFields, InsertAck, UpdateAck};
use crate::repository::DocumentRepository;

#[derive(Clone, Default)]
pub struct MemoryDocumentRepository {
    documents: Arc<RwLock<Vec<Document>>>,
}

impl MemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `documents` already stored.
    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            documents: Arc::new(RwLock::new(documents)),
        }
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentRepository for MemoryDocumentRepository {
    async fn list(&self) -> DocumentResult<Vec<Document>> {
        Ok(self.documents.read().await.clone())
    }

    async fn get(&self, id: ObjectId) -> DocumentResult<Option<Document>> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|doc| doc.id == id).cloned())
    }

    async fn insert(&self, fields: DocumentFields) -> DocumentResult<InsertAck> {
        let id = ObjectId::new();
        self.documents.write().await.push(Document::new(id, fields));
        Ok(InsertAck::new(id))
    }

    async fn update(&self, id: ObjectId, fields: DocumentFields) -> DocumentResult<UpdateAck> {
        let mut documents = self.documents.write().await;
        let Some(doc) = documents.iter_mut().find(|doc| doc.id == id) else {
            return Ok(UpdateAck::new(0, 0));
        };

        let mut modified = false;
        for (key, value) in fields.into_inner() {
            if doc.fields.get(&key) != Some(&value) {
                doc.fields.insert(key, value);
                modified = true;
            }
        }

        Ok(UpdateAck::new(1, u64::from(modified)))
    }

    async fn delete(&self, id: ObjectId) -> DocumentResult<DeleteAck> {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|doc| doc.id != id);
        Ok(DeleteAck::new((before - documents.len()) as u64))
    }
}
