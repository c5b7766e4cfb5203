//! Events Domain
//!
//! HTTP surface of the `events` collection:
//!
//! | Method | Path | Access |
//! |---|---|---|
//! | GET | `/events` | public |
//! | GET | `/events/details/{id}` | owner |
//! | POST | `/events` | owner |
//! | PUT | `/events/{id}` | owner |
//! | DELETE | `/events/{id}` | owner |
//!
//! ```rust,ignore
//! use domain_documents::{CollectionName, DocumentService, MongoDocumentRepository};
//!
//! let repository = MongoDocumentRepository::new(&db, CollectionName::Events);
//! let router = domain_events::router(DocumentService::new(repository), &auth);
//! ```

pub mod handlers;

pub use handlers::{ApiDoc, router};
