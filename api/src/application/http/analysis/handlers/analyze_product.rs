use axum::extract::{Multipart, State, multipart::MultipartRejection};
use productsafe_core::{
    application::create_service,
    domain::{
        analysis::{ports::ProductAnalysisService, value_objects::AnalyzeProductInput},
        image::entities::ImageSource,
    },
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::application::http::{
    analysis::validators::{AnalyzeProductForm, NO_IMAGE_PROVIDED},
    server::{
        api_entities::{
            api_error::{ApiError, ErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeProductResponse {
    /// Final consumer report in Markdown.
    pub result: String,
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "analysis",
    summary = "Analyze a product photo",
    description = "Identifies the product in the photo, writes a nutrition and safety report, \
                   searches the web for recalls, bans and advisories, and merges both into one \
                   consumer report.",
    request_body(content = AnalyzeProductForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = AnalyzeProductResponse),
        (status = 400, description = "Missing image or API key", body = ErrorResponse),
        (status = 500, description = "Upstream or pipeline failure", body = ErrorResponse)
    ),
)]
pub async fn analyze_product(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response<AnalyzeProductResponse>, ApiError> {
    // A body that is not multipart cannot carry the image.
    let mut multipart = multipart.map_err(|e| {
        warn!("Rejected non-multipart analysis request: {}", e);
        ApiError::BadRequest(NO_IMAGE_PROVIDED.to_string())
    })?;
    let mut form = AnalyzeProductForm::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;
                form.image = data.to_vec();
            }
            "api_key" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read api_key: {}", e)))?;
                form.api_key = value.trim().to_string();
            }
            _ => {}
        }
    }

    form.check()?;

    info!(image_size = form.image.len(), "Received product analysis request");

    let service = create_service(state.config_for(&form.api_key), state.http_client.clone())
        .map_err(ApiError::from)?;

    let report = service
        .analyze_product(AnalyzeProductInput::new(ImageSource::Bytes(form.image)))
        .await
        .map_err(|e| {
            error!(error = %e, "Product analysis failed");
            ApiError::InternalServerError(e.to_string())
        })?;

    Ok(Response::OK(AnalyzeProductResponse {
        result: report.final_report,
    }))
}
