use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// Everything one pipeline run produced. Transient: nothing is stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub id: Uuid,
    pub product_description: String,
    pub internal_report: String,
    pub search_findings: String,
    pub final_report: String,
    pub generated_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn new(
        id: Uuid,
        product_description: String,
        internal_report: String,
        search_findings: String,
        final_report: String,
    ) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id,
            product_description,
            internal_report,
            search_findings,
            final_report,
            generated_at: now,
        }
    }
}

/// Pipeline progress, reported on every transition.
///
/// `Idle -> ImageLoaded -> Described -> {ReportPending, SearchPending} ->
/// Merged -> Done`; any error ends in `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStage {
    Idle,
    ImageLoaded,
    Described,
    ReportPending,
    SearchPending,
    Merged,
    Done,
    Failed,
}

impl AnalysisStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStage::Idle => "idle",
            AnalysisStage::ImageLoaded => "image_loaded",
            AnalysisStage::Described => "described",
            AnalysisStage::ReportPending => "report_pending",
            AnalysisStage::SearchPending => "search_pending",
            AnalysisStage::Merged => "merged",
            AnalysisStage::Done => "done",
            AnalysisStage::Failed => "failed",
        }
    }
}

impl fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
