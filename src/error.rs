// src/error.rs
//! Failure classes for calls to the external analysis services

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Protocol { status: StatusCode, body: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() {
            AnalysisError::Network(err.to_string())
        } else if let Some(status) = err.status() {
            AnalysisError::Protocol {
                status,
                body: err.to_string(),
            }
        } else {
            AnalysisError::Unknown(err.to_string())
        }
    }
}

impl AnalysisError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AnalysisError::Protocol { status, .. } => Some(status.as_u16()),
            _ => None,
        }
    }

    /// Response body for protocol errors, the message otherwise
    pub fn detail(&self) -> String {
        match self {
            AnalysisError::Protocol { status, body } if body.trim().is_empty() => {
                status.to_string()
            }
            AnalysisError::Protocol { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AnalysisError::Network(_) => "NETWORK_ERROR",
            AnalysisError::Protocol { .. } => "PROTOCOL_ERROR",
            AnalysisError::Serialization(_) | AnalysisError::Unknown(_) => "UNKNOWN_ERROR",
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Network(msg) => format!(
                "Could not reach the analysis service. Check your network connection ({})",
                msg
            ),
            AnalysisError::Protocol { status, .. } => format!(
                "The analysis service rejected the request with status {}",
                status
            ),
            other => format!("An unexpected error occurred: {}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_detail_prefers_body() {
        let err = AnalysisError::Protocol {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "workflow crashed".to_string(),
        };
        assert_eq!(err.detail(), "workflow crashed");
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(err.error_code(), "PROTOCOL_ERROR");
    }

    #[test]
    fn test_protocol_detail_falls_back_to_status() {
        let err = AnalysisError::Protocol {
            status: StatusCode::NOT_FOUND,
            body: "  ".to_string(),
        };
        assert_eq!(err.detail(), "404 Not Found");
    }

    #[test]
    fn test_user_messages_distinguish_classes() {
        let network = AnalysisError::Network("dns failure".to_string());
        let unknown = AnalysisError::Unknown("???".to_string());

        assert!(network.user_message().contains("network connection"));
        assert!(unknown.user_message().starts_with("An unexpected error"));
        assert_eq!(network.error_code(), "NETWORK_ERROR");
        assert_eq!(unknown.error_code(), "UNKNOWN_ERROR");
        assert_eq!(network.status_code(), None);
    }
}
