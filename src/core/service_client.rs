// src/core/service_client.rs
//! HTTP client for the external analysis workflow and artifact storage

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Response;
use tracing::{debug, info, trace};

use crate::error::{AnalysisError, Result};
use crate::types::Document;

const CV_PART: &str = "cv";
const JD_PART: &str = "jd";
const JSON_MIME: &str = "application/json";

pub struct ServiceClient {
    client: reqwest::Client,
}

impl ServiceClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AnalysisError::Unknown(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Classify network health with a plain GET. Never fails.
    pub async fn probe(&self, url: &str) -> String {
        debug!("Probing connectivity: {}", url);

        match self.client.get(url).send().await {
            Ok(response) => format!("success: {}", response.status().as_u16()),
            Err(e) => format!("failed: {}", e),
        }
    }

    /// POST both documents to the workflow as a multipart payload with `cv` and `jd` parts
    pub async fn submit_documents(
        &self,
        url: &str,
        cv: &Document,
        jd: &Document,
    ) -> Result<Response> {
        let form = Form::new()
            .part(CV_PART, Self::json_part(cv, "cv.json")?)
            .part(JD_PART, Self::json_part(jd, "jd.json")?);

        info!("Submitting documents to workflow: {}", url);

        let response = self.client.post(url).multipart(form).send().await?;
        Self::ensure_success(response).await
    }

    /// GET a URL, mapping non-2xx responses to `AnalysisError::Protocol`
    pub async fn fetch(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await?;
        trace!("GET {} -> {}", url, response.status());
        Self::ensure_success(response).await
    }

    async fn ensure_success(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(AnalysisError::Protocol { status, body })
    }

    fn json_part(document: &Document, file_name: &str) -> Result<Part> {
        let json = serde_json::to_string(document)?;

        Part::text(json)
            .file_name(file_name.to_string())
            .mime_str(JSON_MIME)
            .map_err(|e| AnalysisError::Unknown(format!("Failed to create multipart: {}", e)))
    }
}
