use crate::domain::image::entities::ImageSource;

#[derive(Debug, Clone)]
pub struct AnalyzeProductInput {
    pub image: ImageSource,
}

impl AnalyzeProductInput {
    pub fn new(image: ImageSource) -> Self {
        Self { image }
    }
}
