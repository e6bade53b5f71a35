// src/web/handlers/analysis_handlers.rs
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

use crate::submission::SubmissionPipeline;
use crate::types::{CompatibilityAssessment, SubmissionOutcome};
use crate::web::types::{
    AnalyzeRequest, DataResponse, ServerConfig, StandardErrorResponse, StandardRequest,
    SubmitRequest,
};

pub async fn analyze_handler(
    request: Json<StandardRequest<AnalyzeRequest>>,
) -> Json<DataResponse<CompatibilityAssessment>> {
    let request = request.into_inner();
    let data = request.data;

    info!(
        "Analyzing compatibility for '{}' (cv: {} bytes, job: {} bytes)",
        data.job_title,
        data.cv_text.len(),
        data.job_description.len()
    );

    let assessment =
        crate::analyze_compatibility(&data.cv_text, &data.job_description, &data.job_title);

    Json(DataResponse::success(
        format!("Compatibility score: {}/100", assessment.score),
        assessment,
        request.conversation_id,
    ))
}

pub async fn submit_handler(
    request: Json<StandardRequest<SubmitRequest>>,
    config: &State<ServerConfig>,
) -> Result<Json<DataResponse<SubmissionOutcome>>, Json<StandardErrorResponse>> {
    let request = request.into_inner();
    let conversation_id = request.conversation_id;

    let pipeline = match SubmissionPipeline::new(config.pipeline.clone()) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            error!("Failed to initialize submission pipeline: {}", e);
            return Err(Json(StandardErrorResponse::new(
                e.user_message(),
                e.error_code().to_string(),
                vec![
                    "Check the analysis workflow configuration".to_string(),
                    "Contact system administrator".to_string(),
                ],
                conversation_id,
            )));
        }
    };

    let outcome = pipeline.submit(&request.data.cv, &request.data.jd).await;

    let message = format!(
        "Submission completed: {} of 2 reports retrieved",
        outcome.artifact_count()
    );
    Ok(Json(DataResponse::success(message, outcome, conversation_id)))
}
