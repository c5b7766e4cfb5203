use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use axum_helpers::{
    AccessPolicy, AccessPolicyExt, JsonBody, ObjectIdPath, Session, SessionAuth,
    errors::responses::{
        BadRequestBodyResponse, BadRequestObjectIdResponse, InternalServerErrorResponse,
        NotFoundResponse, UnauthorizedResponse,
    },
};
use domain_documents::{
    DeleteAck, Document, DocumentFields, DocumentRepository, DocumentResult, DocumentService,
    InsertAck, UpdateAck,
};
use std::sync::Arc;
use utoipa::OpenApi;

type SharedService<R> = Arc<DocumentService<R>>;

#[derive(OpenApi)]
#[openapi(
    paths(
        list_registrations,
        get_registration,
        create_registration,
        update_registration,
        delete_registration
    ),
    components(
        schemas(Document, DocumentFields, InsertAck, UpdateAck, DeleteAck),
        responses(
            BadRequestObjectIdResponse,
            BadRequestBodyResponse,
            UnauthorizedResponse,
            NotFoundResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Registrations", description = "Registration documents (MongoDB `registrations` collection)")
    )
)]
pub struct ApiDoc;

/// Registration routes; each one requires a signed-in session.
pub fn router<R: DocumentRepository + 'static>(
    service: DocumentService<R>,
    auth: &SessionAuth,
) -> Router {
    let policy = AccessPolicy::Authenticated;

    Router::new()
        .route(
            "/registrations",
            get(list_registrations::<R>).access(auth, policy),
        )
        .route(
            "/registrations",
            post(create_registration::<R>).access(auth, policy),
        )
        .route(
            "/registrations/{id}",
            get(get_registration::<R>).access(auth, policy),
        )
        .route(
            "/registrations/{id}",
            put(update_registration::<R>).access(auth, policy),
        )
        .route(
            "/registrations/{id}",
            delete(delete_registration::<R>).access(auth, policy),
        )
        .with_state(Arc::new(service))
}

/// List every registration
#[utoipa::path(
    get,
    path = "/registrations",
    tag = "Registrations",
    responses(
        (status = 200, description = "All registrations in natural order", body = Vec<Document>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_registrations<R: DocumentRepository>(
    State(service): State<SharedService<R>>,
) -> DocumentResult<Json<Vec<Document>>> {
    Ok(Json(service.list().await?))
}

/// Get one registration
#[utoipa::path(
    get,
    path = "/registrations/{id}",
    tag = "Registrations",
    params(("id" = String, Path, description = "Registration id (24 hex characters)")),
    responses(
        (status = 200, description = "Registration found", body = Document),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_registration<R: DocumentRepository>(
    State(service): State<SharedService<R>>,
    ObjectIdPath(id): ObjectIdPath,
) -> DocumentResult<Json<Document>> {
    Ok(Json(service.get(id).await?))
}

/// Register for an event
#[utoipa::path(
    post,
    path = "/registrations",
    tag = "Registrations",
    request_body = DocumentFields,
    responses(
        (status = 201, description = "Registration stored", body = InsertAck),
        (status = 400, response = BadRequestBodyResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_registration<R: DocumentRepository>(
    State(service): State<SharedService<R>>,
    Session(claims): Session,
    JsonBody(fields): JsonBody<DocumentFields>,
) -> DocumentResult<impl IntoResponse> {
    tracing::debug!(user = ?claims.email(), "Creating registration");
    let ack = service.create(fields).await?;
    Ok((StatusCode::CREATED, Json(ack)))
}

/// Merge fields into a registration; `_id` in the body is ignored
#[utoipa::path(
    put,
    path = "/registrations/{id}",
    tag = "Registrations",
    params(("id" = String, Path, description = "Registration id (24 hex characters)")),
    request_body = DocumentFields,
    responses(
        (status = 200, description = "Update acknowledged", body = UpdateAck),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_registration<R: DocumentRepository>(
    State(service): State<SharedService<R>>,
    ObjectIdPath(id): ObjectIdPath,
    JsonBody(fields): JsonBody<DocumentFields>,
) -> DocumentResult<Json<UpdateAck>> {
    Ok(Json(service.update(id, fields).await?))
}

/// Delete a registration
#[utoipa::path(
    delete,
    path = "/registrations/{id}",
    tag = "Registrations",
    params(("id" = String, Path, description = "Registration id (24 hex characters)")),
    responses(
        (status = 200, description = "Delete acknowledged", body = DeleteAck),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_registration<R: DocumentRepository>(
    State(service): State<SharedService<R>>,
    ObjectIdPath(id): ObjectIdPath,
) -> DocumentResult<Json<DeleteAck>> {
    Ok(Json(service.delete(id).await?))
}
