// src/types/outcome.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttemptStatus {
    Success,
    Failed,
    Error,
}

/// One line of the download diagnostics.
///
/// Attempt entries carry the outcome of a single GET. Delay entries follow a
/// failed attempt, repeat its attempt number, are always `Failed`, and set
/// `delay_ms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryLogEntry {
    pub url: String,
    pub attempt: u32,
    pub timestamp: i64,
    pub status: AttemptStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,
}

impl RetryLogEntry {
    pub fn is_delay(&self) -> bool {
        self.delay_ms.is_some()
    }

    pub fn is_attempt(&self) -> bool {
        !self.is_delay()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOutcome {
    /// Always `true` once the pipeline has run; inspect the other fields.
    pub success: bool,
    pub html_artifact: Option<String>,
    /// Base64-encoded PDF body
    pub pdf_artifact: Option<String>,
    pub network_status: String,
    pub webhook_status: String,
    pub webhook_error: Option<String>,
    pub retry_log: Vec<RetryLogEntry>,
}

impl SubmissionOutcome {
    pub fn artifact_count(&self) -> usize {
        self.html_artifact.is_some() as usize + self.pdf_artifact.is_some() as usize
    }

    /// Stricter view than `success`: webhook accepted and both artifacts present
    pub fn is_complete(&self) -> bool {
        self.webhook_error.is_none() && self.artifact_count() == 2
    }

    pub fn entries_for<'a>(&'a self, url: &'a str) -> impl Iterator<Item = &'a RetryLogEntry> {
        self.retry_log.iter().filter(move |e| e.url == url)
    }
}
