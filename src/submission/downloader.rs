// src/submission/downloader.rs
use std::time::Duration;

use reqwest::Response;
use tracing::{info, warn};

use crate::core::config_manager::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY_MS};
use crate::core::ServiceClient;
use crate::error::AnalysisError;
use crate::types::{AttemptStatus, RetryLogEntry};

/// GET with a bounded number of attempts and a fixed pause between them.
///
/// Every attempt appends one entry to the caller's log, and every failed
/// attempt except the last appends one `failed` delay entry before sleeping.
pub struct RetryDownloader<'a> {
    client: &'a ServiceClient,
    max_attempts: u32,
    retry_delay: Duration,
}

impl<'a> RetryDownloader<'a> {
    pub fn new(client: &'a ServiceClient) -> Self {
        Self {
            client,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Returns `None` once all attempts are exhausted; that is not an error.
    pub async fn download(&self, url: &str, log: &mut Vec<RetryLogEntry>) -> Option<Response> {
        for attempt in 1..=self.max_attempts {
            info!("Download attempt {}/{}: {}", attempt, self.max_attempts, url);

            let failure = match self.client.fetch(url).await {
                Ok(response) => {
                    let mut entry = log_entry(url, attempt, AttemptStatus::Success);
                    entry.status_code = Some(response.status().as_u16());
                    log.push(entry);
                    info!("Downloaded {} on attempt {}", url, attempt);
                    return Some(response);
                }
                Err(e) => e,
            };

            let status = match failure {
                AnalysisError::Protocol { .. } => AttemptStatus::Failed,
                _ => AttemptStatus::Error,
            };
            warn!("Attempt {} for {} failed: {}", attempt, url, failure);

            let mut entry = log_entry(url, attempt, status);
            entry.status_code = failure.status_code();
            entry.error = Some(failure.detail());
            log.push(entry);

            if attempt < self.max_attempts {
                let delay_ms = self.retry_delay.as_millis() as u64;
                let mut delay = log_entry(url, attempt, AttemptStatus::Failed);
                delay.delay_ms = Some(delay_ms);
                log.push(delay);

                info!("Waiting {}ms before retrying {}", delay_ms, url);
                tokio::time::sleep(self.retry_delay).await;
            }
        }

        warn!("Giving up on {} after {} attempts", url, self.max_attempts);
        None
    }
}

fn log_entry(url: &str, attempt: u32, status: AttemptStatus) -> RetryLogEntry {
    RetryLogEntry {
        url: url.to_string(),
        attempt,
        timestamp: chrono::Utc::now().timestamp_millis(),
        status,
        status_code: None,
        error: None,
        delay_ms: None,
    }
}
