use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const NO_IMAGE_PROVIDED: &str = "No image provided";
pub const NO_API_KEY_PROVIDED: &str = "No API key provided";

/// Fields of the `POST /analyze` multipart form.
#[derive(Debug, Default, ToSchema, Validate)]
pub struct AnalyzeProductForm {
    /// Product photo.
    #[schema(value_type = String, format = Binary)]
    #[validate(length(min = 1, message = "No image provided"))]
    pub image: Vec<u8>,

    /// Gemini API key used for this request only.
    #[validate(length(min = 1, message = "No API key provided"))]
    pub api_key: String,
}

impl AnalyzeProductForm {
    /// Reports the image problem before the key problem.
    pub fn check(&self) -> Result<(), ApiError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let fields = errors.field_errors();
        for field in ["image", "api_key"] {
            if let Some(message) = fields
                .get(field)
                .and_then(|errors| errors.first())
                .and_then(|error| error.message.as_ref())
            {
                return Err(ApiError::BadRequest(message.to_string()));
            }
        }

        Err(ApiError::BadRequest(errors.to_string()))
    }
}
