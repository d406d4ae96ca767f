use tracing::{Instrument, debug, error, info, info_span, instrument};
use uuid::Uuid;

use crate::domain::{
    analysis::{
        entities::{AnalysisReport, AnalysisStage},
        helpers::{dispatch_tool_calls, join_search_results},
        ports::ProductAnalysisService,
        value_objects::AnalyzeProductInput,
    },
    chat::{entities::ChatTurn, ports::LLMClient},
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    image::{entities::ImagePayload, ports::ImageFetcher, services::ImageIngestService},
    prompt::templates::{
        FINAL_REPORT, INTERNAL_REPORT, NUTRITIONIST_PERSONA, PRODUCT_INFO, REPORT, SEARCH_FINDINGS,
        SEARCH_PLAN, SEARCH_RESULTS, SEARCH_SUMMARY, VISION_INSTRUCTION,
    },
    search::ports::SearchTool,
};

impl<LLM, S, F> ProductAnalysisService for Service<LLM, S, F>
where
    LLM: LLMClient,
    S: SearchTool,
    F: ImageFetcher,
{
    #[instrument(skip(self, image), fields(image_size = image.len()))]
    async fn describe_product(&self, image: ImagePayload) -> Result<String, CoreError> {
        let turns = vec![
            ChatTurn::system(NUTRITIONIST_PERSONA),
            ChatTurn::user_with_image(VISION_INSTRUCTION, image.encode()),
        ];

        let response = self.llm_client.generate(turns).await?;
        if response.text.trim().is_empty() {
            debug!("Vision stage returned an empty description");
        }

        Ok(response.text)
    }

    #[instrument(skip_all)]
    async fn generate_report(&self, product_info: String) -> Result<String, CoreError> {
        info!(stage = %AnalysisStage::ReportPending, "Generating internal report");
        let prompt = REPORT.render(&[(PRODUCT_INFO, &product_info)])?;
        let response = self.llm_client.generate(vec![ChatTurn::user(prompt)]).await?;

        Ok(response.text)
    }

    #[instrument(skip_all)]
    async fn augment_with_search(&self, product_info: String) -> Result<String, CoreError> {
        info!(stage = %AnalysisStage::SearchPending, "Planning web searches");
        let prompt = SEARCH_PLAN.render(&[(PRODUCT_INFO, &product_info)])?;
        let decision = self
            .llm_client
            .generate_with_tools(vec![ChatTurn::user(prompt)], vec![self.search_tool.definition()])
            .await?;

        if !decision.has_tool_calls() {
            info!("Model answered without requesting any search");
            return Ok(decision.text);
        }

        info!(tool_calls = decision.tool_calls.len(), "Model requested web searches");
        let results = dispatch_tool_calls(&self.search_tool, &decision.tool_calls).await?;
        let joined = join_search_results(&results);

        let prompt = SEARCH_SUMMARY.render(&[(SEARCH_RESULTS, &joined)])?;
        let summary = self.llm_client.generate(vec![ChatTurn::user(prompt)]).await?;

        Ok(summary.text)
    }

    #[instrument(skip_all)]
    async fn merge_reports(
        &self,
        internal_report: String,
        search_findings: String,
    ) -> Result<String, CoreError> {
        let prompt = FINAL_REPORT.render(&[
            (INTERNAL_REPORT, &internal_report),
            (SEARCH_FINDINGS, &search_findings),
        ])?;
        let response = self.llm_client.generate(vec![ChatTurn::user(prompt)]).await?;

        Ok(response.text)
    }

    async fn analyze_product(&self, input: AnalyzeProductInput) -> Result<AnalysisReport, CoreError> {
        let analysis_id = generate_uuid_v7();
        let span = info_span!("product_analysis", %analysis_id);

        self.run_pipeline(analysis_id, input)
            .instrument(span)
            .await
            .inspect_err(|e| {
                error!(%analysis_id, stage = %AnalysisStage::Failed, error = %e, "Product analysis failed");
            })
    }
}

impl<LLM, S, F> Service<LLM, S, F>
where
    LLM: LLMClient,
    S: SearchTool,
    F: ImageFetcher,
{
    async fn run_pipeline(
        &self,
        analysis_id: Uuid,
        input: AnalyzeProductInput,
    ) -> Result<AnalysisReport, CoreError> {
        info!(stage = %AnalysisStage::Idle, source = %input.image, "Starting product analysis");

        // 1. Load image
        let image = self.load_image(input.image).await?;
        info!(stage = %AnalysisStage::ImageLoaded, size = image.len());

        // 2. Describe product
        let description = self.describe_product(image).await?;
        info!(stage = %AnalysisStage::Described, chars = description.len());

        // 3. Report and search branches share the description and nothing else
        let (internal_report, search_findings) = tokio::try_join!(
            self.generate_report(description.clone()),
            self.augment_with_search(description.clone()),
        )?;

        // 4. Merge
        let final_report = self
            .merge_reports(internal_report.clone(), search_findings.clone())
            .await?;
        info!(stage = %AnalysisStage::Merged, chars = final_report.len());

        let report = AnalysisReport::new(
            analysis_id,
            description,
            internal_report,
            search_findings,
            final_report,
        );
        info!(stage = %AnalysisStage::Done, "Product analysis complete");

        Ok(report)
    }
}
