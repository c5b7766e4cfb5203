use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use axum_helpers::{
    AccessPolicy, AccessPolicyExt, JsonBody, ObjectIdPath, Owner, SessionAuth,
    errors::responses::{
        BadRequestBodyResponse, BadRequestObjectIdResponse, ForbiddenResponse,
        InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
    },
};
use domain_documents::{
    DeleteAck, Document, DocumentFields, DocumentRepository, DocumentResult, DocumentService,
    InsertAck, UpdateAck,
};
use std::sync::Arc;
use utoipa::OpenApi;

/// OpenAPI documentation for the events API
#[derive(OpenApi)]
#[openapi(
    paths(list_events, get_event, create_event, update_event, delete_event),
    components(
        schemas(Document, DocumentFields, InsertAck, UpdateAck, DeleteAck),
        responses(
            BadRequestObjectIdResponse,
            BadRequestBodyResponse,
            UnauthorizedResponse,
            ForbiddenResponse,
            NotFoundResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Events", description = "Event documents (MongoDB `events` collection)")
    )
)]
pub struct ApiDoc;

/// Events routes, each with its declared access policy.
///
/// Listing is public; reading one event and every write are owner-scoped.
pub fn router<R: DocumentRepository + 'static>(
    service: DocumentService<R>,
    auth: &SessionAuth,
) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/events",
            get(list_events::<R>).access(auth, AccessPolicy::Public),
        )
        .route(
            "/events",
            post(create_event::<R>).access(auth, AccessPolicy::Owner),
        )
        .route(
            "/events/details/{id}",
            get(get_event::<R>).access(auth, AccessPolicy::Owner),
        )
        .route(
            "/events/{id}",
            put(update_event::<R>).access(auth, AccessPolicy::Owner),
        )
        .route(
            "/events/{id}",
            delete(delete_event::<R>).access(auth, AccessPolicy::Owner),
        )
        .with_state(shared_service)
}

/// List every event
#[utoipa::path(
    get,
    path = "/events",
    tag = "Events",
    responses(
        (status = 200, description = "All events in natural order", body = Vec<Document>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_events<R: DocumentRepository>(
    State(service): State<Arc<DocumentService<R>>>,
) -> DocumentResult<Json<Vec<Document>>> {
    let events = service.list().await?;
    Ok(Json(events))
}

/// Get one event
#[utoipa::path(
    get,
    path = "/events/details/{id}",
    tag = "Events",
    params(
        ("id" = String, Path, description = "Event id (24 hex characters)"),
        ("email" = Option<String>, Query, description = "Must equal the session email when given")
    ),
    responses(
        (status = 200, description = "Event found", body = Document),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_event<R: DocumentRepository>(
    State(service): State<Arc<DocumentService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> DocumentResult<Json<Document>> {
    let event = service.get(id).await?;
    Ok(Json(event))
}

/// Create an event
#[utoipa::path(
    post,
    path = "/events",
    tag = "Events",
    params(
        ("email" = Option<String>, Query, description = "Must equal the session email when given")
    ),
    request_body = DocumentFields,
    responses(
        (status = 201, description = "Event stored", body = InsertAck),
        (status = 400, response = BadRequestBodyResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_event<R: DocumentRepository>(
    State(service): State<Arc<DocumentService<R>>>,
    owner: Owner,
    JsonBody(fields): JsonBody<DocumentFields>,
) -> DocumentResult<impl IntoResponse> {
    tracing::debug!(owner = %owner.email, "Creating event");
    let ack = service.create(fields).await?;
    Ok((StatusCode::CREATED, Json(ack)))
}

/// Merge fields into an event
#[utoipa::path(
    put,
    path = "/events/{id}",
    tag = "Events",
    params(
        ("id" = String, Path, description = "Event id (24 hex characters)"),
        ("email" = Option<String>, Query, description = "Must equal the session email when given")
    ),
    request_body = DocumentFields,
    responses(
        (status = 200, description = "Update acknowledged", body = UpdateAck),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_event<R: DocumentRepository>(
    State(service): State<Arc<DocumentService<R>>>,
    owner: Owner,
    ObjectIdPath(id): ObjectIdPath,
    JsonBody(fields): JsonBody<DocumentFields>,
) -> DocumentResult<Json<UpdateAck>> {
    tracing::debug!(owner = %owner.email, event_id = %id, "Updating event");
    let ack = service.update(id, fields).await?;
    Ok(Json(ack))
}

/// Delete an event
#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = "Events",
    params(
        ("id" = String, Path, description = "Event id (24 hex characters)"),
        ("email" = Option<String>, Query, description = "Must equal the session email when given")
    ),
    responses(
        (status = 200, description = "Delete acknowledged; deletedCount is 0 for unknown ids", body = DeleteAck),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_event<R: DocumentRepository>(
    State(service): State<Arc<DocumentService<R>>>,
    owner: Owner,
    ObjectIdPath(id): ObjectIdPath,
) -> DocumentResult<Json<DeleteAck>> {
    tracing::debug!(owner = %owner.email, event_id = %id, "Deleting event");
    let ack = service.delete(id).await?;
    Ok(Json(ack))
}
