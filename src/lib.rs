//! CV / job-description compatibility scoring and report submission.
//!
//! Two independent paths are exposed:
//! - [`analyze_compatibility`] scores a CV against a job description locally
//! - [`SubmissionPipeline`] hands both documents to the external analysis
//!   workflow and retrieves its rendered reports

pub mod cli;
pub mod core;
pub mod error;
pub mod matching;
pub mod submission;
pub mod types;
pub mod web;

pub use crate::core::{ConfigManager, PipelineConfig};
pub use error::AnalysisError;
pub use submission::{RetryDownloader, SubmissionPipeline};
pub use types::{
    AttemptStatus, CompatibilityAssessment, Document, DocumentMetadata, MatchResult,
    RetryLogEntry, SubmissionOutcome, Term,
};
pub use web::start_web_server;

use tracing::info;

/// Run term extraction, matching, scoring and narrative generation in one go.
///
/// Never fails: an empty or unusable job description yields a score of 0.
pub fn analyze_compatibility(
    cv_text: &str,
    job_text: &str,
    job_title: &str,
) -> CompatibilityAssessment {
    let terms = matching::extract_terms(job_text);
    let result = matching::match_terms(&terms, cv_text);
    let score = matching::score(&result, cv_text);
    let narrative = matching::generate_narrative(&result, score, cv_text, job_title);

    info!(
        "Compatibility for '{}': {} ({} matched, {} missing)",
        job_title,
        score,
        result.matched.len(),
        result.missing.len()
    );

    CompatibilityAssessment {
        score,
        matched_terms: result.matched_keywords(),
        missing_terms: result.missing_keywords(),
        strengths: narrative.strengths,
        weaknesses: narrative.weaknesses,
        recommendations: narrative.recommendations,
        executive_summary: narrative.summary,
    }
}
