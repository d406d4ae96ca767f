use std::future::Future;

use crate::domain::{
    analysis::{entities::AnalysisReport, value_objects::AnalyzeProductInput},
    common::entities::app_errors::CoreError,
    image::entities::ImagePayload,
};

/// Service trait for the product safety pipeline
#[cfg_attr(test, mockall::automock)]
pub trait ProductAnalysisService: Send + Sync {
    /// Vision stage: product name, type, ingredients and brand as free text.
    fn describe_product(
        &self,
        image: ImagePayload,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Structured nutrition and safety report for a description.
    fn generate_report(
        &self,
        product_info: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Recall, ban and advisory findings gathered through web search.
    fn augment_with_search(
        &self,
        product_info: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Consumer-facing Markdown report combining both branches.
    fn merge_reports(
        &self,
        internal_report: String,
        search_findings: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Whole pipeline from image source to final report.
    fn analyze_product(
        &self,
        input: AnalyzeProductInput,
    ) -> impl Future<Output = Result<AnalysisReport, CoreError>> + Send;
}
