// src/submission/pipeline.rs
use base64::prelude::{Engine as _, BASE64_STANDARD};
use tracing::{error, info, warn};

use super::RetryDownloader;
use crate::core::{PipelineConfig, ServiceClient};
use crate::error::{AnalysisError, Result};
use crate::types::{Document, RetryLogEntry, SubmissionOutcome};

/// Submits a CV and job description to the analysis workflow, then collects
/// the rendered HTML and PDF reports.
///
/// Steps run strictly in sequence and none of them aborts the run: a failed
/// probe, webhook or download only shows up in the returned outcome.
pub struct SubmissionPipeline {
    client: ServiceClient,
    config: PipelineConfig,
}

impl SubmissionPipeline {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        let client = ServiceClient::new(config.timeout())?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub async fn submit(&self, cv: &Document, jd: &Document) -> SubmissionOutcome {
        info!(
            "Starting submission for {} ({} bytes) and {} ({} bytes)",
            cv.metadata.file_name,
            cv.metadata.file_size,
            jd.metadata.file_name,
            jd.metadata.file_size
        );

        let network_status = self.client.probe(&self.config.probe_url).await;
        info!("Connectivity probe: {}", network_status);

        let (webhook_status, webhook_error) = self.send_webhook(cv, jd).await;

        let mut retry_log = Vec::new();
        let downloader = RetryDownloader::new(&self.client)
            .with_max_attempts(self.config.max_attempts)
            .with_retry_delay(self.config.retry_delay());

        let html_artifact = self.fetch_html(&downloader, &mut retry_log).await;

        info!(
            "Waiting {}ms before fetching the PDF report",
            self.config.artifact_delay_ms
        );
        tokio::time::sleep(self.config.artifact_delay()).await;

        let pdf_artifact = self.fetch_pdf(&downloader, &mut retry_log).await;

        info!(
            "Submission finished: webhook={}, html={}, pdf={}, log entries={}",
            webhook_status,
            html_artifact.is_some(),
            pdf_artifact.is_some(),
            retry_log.len()
        );

        // callers rely on success being set once the run completes
        SubmissionOutcome {
            success: true,
            html_artifact,
            pdf_artifact,
            network_status,
            webhook_status,
            webhook_error,
            retry_log,
        }
    }

    async fn send_webhook(&self, cv: &Document, jd: &Document) -> (String, Option<String>) {
        match self
            .client
            .submit_documents(&self.config.webhook_url, cv, jd)
            .await
        {
            Ok(response) => {
                let status = response.status().to_string();
                info!("Webhook accepted documents: {}", status);
                (status, None)
            }
            Err(e) => {
                error!("Webhook submission failed: {}", e);
                let status = match &e {
                    AnalysisError::Protocol { status, .. } => status.to_string(),
                    _ => "error".to_string(),
                };
                (status, Some(e.detail()))
            }
        }
    }

    async fn fetch_html(
        &self,
        downloader: &RetryDownloader<'_>,
        log: &mut Vec<RetryLogEntry>,
    ) -> Option<String> {
        let url = &self.config.html_artifact_url;
        let response = downloader.download(url, log).await?;

        match response.text().await {
            Ok(html) => {
                info!("Retrieved HTML report ({} bytes)", html.len());
                Some(html)
            }
            Err(e) => {
                warn!("Failed to read HTML report body from {}: {}", url, e);
                None
            }
        }
    }

    async fn fetch_pdf(
        &self,
        downloader: &RetryDownloader<'_>,
        log: &mut Vec<RetryLogEntry>,
    ) -> Option<String> {
        let url = &self.config.pdf_artifact_url;
        let response = downloader.download(url, log).await?;

        match response.bytes().await {
            Ok(bytes) => {
                info!("Retrieved PDF report ({} bytes)", bytes.len());
                Some(BASE64_STANDARD.encode(&bytes))
            }
            Err(e) => {
                warn!("Failed to read PDF report body from {}: {}", url, e);
                None
            }
        }
    }
}
