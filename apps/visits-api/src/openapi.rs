//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Service-level routes; the visits domain document is merged in by
/// [`document`].
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Visits API",
        version = "0.1.0",
        description = "Shared visit counter in Redis, with a degraded mode when Redis is absent"
    ),
    paths(crate::api::home, observability::tally::tally_handler),
    components(schemas(observability::TallySnapshot)),
    tags(
        (name = "service", description = "Service landing route"),
        (name = "observability", description = "Request counts and metrics")
    )
)]
pub struct ApiDoc;

/// Complete OpenAPI document served at `/api-docs/openapi.json`.
pub fn document() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(domain_visits::ApiDoc::openapi());
    doc
}
