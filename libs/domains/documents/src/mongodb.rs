//! MongoDB implementation of DocumentRepository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{self, Bson, doc, oid::ObjectId},
};
use serde_json::Value;
use tracing::instrument;

use crate::error::{DocumentError, DocumentResult};
use crate::models::{
    CollectionName, DeleteAck, Document, DocumentFields, ID_FIELD, InsertAck, UpdateAck,
};
use crate::repository::DocumentRepository;

pub struct MongoDocumentRepository {
    collection: Collection<bson::Document>,
}

impl MongoDocumentRepository {
    /// ```ignore
    /// let client = connect_from_config_with_retry(&config, None).await?;
    /// let events = MongoDocumentRepository::new(&client.database("speintSpace"), CollectionName::Events);
    /// ```
    pub fn new(db: &Database, name: CollectionName) -> Self {
        Self::with_collection(db, name.as_ref())
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<bson::Document>(collection_name),
        }
    }

    pub fn collection(&self) -> &Collection<bson::Document> {
        &self.collection
    }
}

/// JSON fields to a BSON document.
pub(crate) fn to_bson_document(fields: DocumentFields) -> DocumentResult<bson::Document> {
    bson::to_document(fields.as_map()).map_err(|e| DocumentError::InvalidBody(e.to_string()))
}

/// Stored BSON to the wire model. Non-JSON types use relaxed Extended JSON.
pub(crate) fn from_bson_document(mut raw: bson::Document) -> DocumentResult<Document> {
    let id = match raw.remove(ID_FIELD) {
        Some(Bson::ObjectId(id)) => id,
        other => {
            return Err(DocumentError::Database(format!(
                "stored document has a non-ObjectId _id: {other:?}"
            )));
        }
    };

    match Bson::Document(raw).into_relaxed_extjson() {
        Value::Object(fields) => Ok(Document { id, fields }),
        other => Err(DocumentError::Database(format!(
            "stored document did not convert to an object: {other}"
        ))),
    }
}

#[async_trait]
impl DocumentRepository for MongoDocumentRepository {
    #[instrument(skip(self), fields(collection = %self.collection.name()))]
    async fn list(&self) -> DocumentResult<Vec<Document>> {
        let cursor = self.collection.find(doc! {}).await?;
        let raw: Vec<bson::Document> = cursor.try_collect().await?;

        raw.into_iter().map(from_bson_document).collect()
    }

    #[instrument(skip(self), fields(collection = %self.collection.name()))]
    async fn get(&self, id: ObjectId) -> DocumentResult<Option<Document>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await?
            .map(from_bson_document)
            .transpose()
    }

    #[instrument(skip(self, fields), fields(collection = %self.collection.name(), field_count = fields.len()))]
    async fn insert(&self, fields: DocumentFields) -> DocumentResult<InsertAck> {
        let body = to_bson_document(fields)?;
        let result = self.collection.insert_one(body).await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            DocumentError::Database(format!(
                "store assigned a non-ObjectId id: {:?}",
                result.inserted_id
            ))
        })?;

        tracing::info!(document_id = %id, "Document created");
        Ok(InsertAck::new(id))
    }

    #[instrument(skip(self, fields), fields(collection = %self.collection.name()))]
    async fn update(&self, id: ObjectId, fields: DocumentFields) -> DocumentResult<UpdateAck> {
        let set = to_bson_document(fields)?;
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": set })
            .await?;

        tracing::info!(
            document_id = %id,
            matched = result.matched_count,
            modified = result.modified_count,
            "Document updated"
        );
        Ok(UpdateAck::new(result.matched_count, result.modified_count))
    }

    #[instrument(skip(self), fields(collection = %self.collection.name()))]
    async fn delete(&self, id: ObjectId) -> DocumentResult<DeleteAck> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        tracing::info!(document_id = %id, deleted = result.deleted_count, "Document deleted");
        Ok(DeleteAck::new(result.deleted_count))
    }
}
