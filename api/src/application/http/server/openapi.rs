use crate::application::http::{analysis::router::AnalysisApiDoc, health::HealthApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ProductSafe API",
        description = "Product safety analysis from a single photo"
    ),
    tags(
        (name = "analysis", description = "Photo to consumer report"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

/// Full document with every route group merged in.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(AnalysisApiDoc::openapi());
    openapi.merge(HealthApiDoc::openapi());
    openapi
}
