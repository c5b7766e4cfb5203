use crate::api::session::SessionApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Event Registration API",
        version = "0.1.0",
        description = "Events, registrations and cookie sessions backed by MongoDB"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    )
)]
struct ApiInfo;

/// Combined OpenAPI document served at `/api-docs/openapi.json`.
///
/// Domain documents are merged rather than nested since every route lives
/// at the root.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ApiInfo::openapi();
        doc.merge(SessionApiDoc::openapi());
        doc.merge(domain_events::ApiDoc::openapi());
        doc.merge(domain_registrations::ApiDoc::openapi());
        doc
    }
}
