// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use handlers::*;
pub use types::*;

use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use tracing::info;

use crate::core::{ConfigManager, PipelineConfig};
use crate::types::{CompatibilityAssessment, SubmissionOutcome};

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[post("/analyze", data = "<request>")]
pub async fn analyze(
    request: Json<StandardRequest<AnalyzeRequest>>,
) -> Json<DataResponse<CompatibilityAssessment>> {
    handlers::analyze_handler(request).await
}

#[post("/submit", data = "<request>")]
pub async fn submit(
    request: Json<StandardRequest<SubmitRequest>>,
    config: &State<ServerConfig>,
) -> Result<Json<DataResponse<SubmissionOutcome>>, Json<StandardErrorResponse>> {
    handlers::submit_handler(request, config).await
}

#[get("/health")]
pub async fn health() -> Json<TextResponse> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
        None,
    ))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Request body could not be parsed".to_string(),
        "UNPROCESSABLE_ENTITY".to_string(),
        vec!["Verify all required fields are present".to_string()],
        None,
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
        None,
    ))
}

/// Assemble the rocket instance without launching it
pub fn build_rocket(pipeline: PipelineConfig) -> Rocket<Build> {
    rocket::build()
        .attach(Cors)
        .manage(ServerConfig { pipeline })
        .register("/api", catchers![bad_request, unprocessable, internal_error])
        .mount("/api", routes![analyze, submit, health, options])
}

pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    info!("Starting CV compatibility API server");
    info!("Environment: {}", config.environment);
    info!("Workflow webhook: {}", config.pipeline.webhook_url);
    info!("Server: http://0.0.0.0:{}", config.port);

    let figment = rocket::Config::figment()
        .merge(("port", config.port))
        .merge(("address", "0.0.0.0"));

    let _rocket = build_rocket(config.pipeline)
        .configure(figment)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket server failed: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::http::ContentType;
    use rocket::local::asynchronous::Client;
    use serde_json::{json, Value};

    async fn client() -> Client {
        Client::tracked(build_rocket(PipelineConfig::default()))
            .await
            .expect("valid rocket instance")
    }

    #[rocket::async_test]
    async fn test_health() {
        let client = client().await;
        let response = client.get("/api/health").dispatch().await;

        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body["message"], "OK");
    }

    #[rocket::async_test]
    async fn test_analyze_returns_assessment() {
        let client = client().await;
        let response = client
            .post("/api/analyze")
            .header(ContentType::JSON)
            .body(
                json!({
                    "cv_text": "I have 5 years of experience and am proficient in React development",
                    "job_description": "Senior Software Engineer with 5 years experience in React and Node.js",
                    "job_title": "Senior Software Engineer",
                    "conversation_id": "abc-123"
                })
                .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body["type"], "data");
        assert_eq!(body["success"], true);
        assert_eq!(body["conversation_id"], "abc-123");
        assert_eq!(body["data"]["score"], 50);
        assert_eq!(body["data"]["matchedTerms"], json!(["years", "experience", "react"]));
    }

    #[rocket::async_test]
    async fn test_analyze_rejects_malformed_body() {
        let client = client().await;
        let response = client
            .post("/api/analyze")
            .header(ContentType::JSON)
            .body(r#"{"cv_text": 42}"#)
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::UnprocessableEntity);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error_code"], "UNPROCESSABLE_ENTITY");
    }
}
