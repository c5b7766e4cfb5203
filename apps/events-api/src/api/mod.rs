//! HTTP surface of the service.
//!
//! Routes are mounted at the root; the frontends call `/events/...` and
//! `/registrations/...` directly.

pub mod health;
pub mod session;

use crate::state::AppState;
use axum::Router;
use axum_helpers::SessionAuth;
use domain_documents::{
    CollectionName, DocumentRepository, DocumentService, MongoDocumentRepository,
};

/// Every application route, for any pair of repositories.
pub fn router<E, R>(
    events: DocumentService<E>,
    registrations: DocumentService<R>,
    auth: &SessionAuth,
    secure_cookie: bool,
) -> Router
where
    E: DocumentRepository + 'static,
    R: DocumentRepository + 'static,
{
    Router::new()
        .merge(health::liveness_router())
        .merge(session::router(auth, secure_cookie))
        .merge(domain_events::router(events, auth))
        .merge(domain_registrations::router(registrations, auth))
}

/// Production routes over the MongoDB collections, plus `/ready`.
pub fn routes(state: &AppState) -> Router {
    let events = MongoDocumentRepository::new(&state.db, CollectionName::Events);
    let registrations = MongoDocumentRepository::new(&state.db, CollectionName::Registrations);

    router(
        DocumentService::new(events),
        DocumentService::new(registrations),
        &state.auth,
        state.config.environment.use_https(),
    )
    .merge(health::readiness_router(state.mongo_client.clone()))
}
