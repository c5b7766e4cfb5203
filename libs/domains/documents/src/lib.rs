//! Documents Domain
//!
//! Schema-less records kept in MongoDB collections. The `events` and
//! `registrations` domains are thin HTTP layers over this crate.
//!
//! ```text
//! ┌──────────────────┐
//! │ domain handlers  │  ← events / registrations routers
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │ DocumentService  │  ← empty-update guard, not-found mapping
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │ DocumentRepository│ ← MongoDB or in-memory
//! └──────────────────┘
//! ```
//!
//! ```rust,no_run
//! use domain_documents::{CollectionName, DocumentService, MongoDocumentRepository};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("speintSpace");
//!
//! let events = DocumentService::new(MongoDocumentRepository::new(&db, CollectionName::Events));
//! let all = events.list().await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{DocumentError, DocumentResult};
pub use memory::MemoryDocumentRepository;
pub use models::{
    CollectionName, DeleteAck, Document, DocumentFields, ID_FIELD, InsertAck, UpdateAck,
};
pub use crate::mongodb::MongoDocumentRepository;
#[cfg(any(test, feature = "mock"))]
pub use repository::MockDocumentRepository;
pub use repository::DocumentRepository;
pub use service::DocumentService;
