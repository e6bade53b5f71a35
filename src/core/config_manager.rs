// src/core/config_manager.rs
//! Configuration loading: defaults, optional config.yaml, then environment variables

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;
pub const DEFAULT_ARTIFACT_DELAY_MS: u64 = 1000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_PORT: u16 = 8000;

const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: String,
    pub pipeline: PipelineConfig,
    pub port: u16,
}

/// Endpoints and timing of the submission pipeline
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub probe_url: String,
    pub webhook_url: String,
    pub html_artifact_url: String,
    pub pdf_artifact_url: String,
    pub max_attempts: u32,
    pub retry_delay_ms: u64,
    pub artifact_delay_ms: u64,
    pub timeout_seconds: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            probe_url: "https://www.google.com".to_string(),
            webhook_url: "http://127.0.0.1:5678/webhook/cv-analysis".to_string(),
            html_artifact_url: "http://127.0.0.1:9000/reports/analysis.html".to_string(),
            pdf_artifact_url: "http://127.0.0.1:9000/reports/analysis.pdf".to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
            artifact_delay_ms: DEFAULT_ARTIFACT_DELAY_MS,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl PipelineConfig {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    pub fn artifact_delay(&self) -> Duration {
        Duration::from_millis(self.artifact_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    local: Option<PipelineConfig>,
    production: Option<PipelineConfig>,
}

impl ConfigManager {
    /// Load all configuration for the current environment
    pub fn load() -> Result<Self> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string());
        info!("Loading configuration for environment: {}", environment);

        let mut pipeline = Self::load_file(Path::new(CONFIG_FILE), &environment)?;
        Self::apply_env_overrides(&mut pipeline, |key| std::env::var(key).ok())?;

        let port = match std::env::var("ROCKET_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .context("ROCKET_PORT must be a valid port number")?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            environment,
            pipeline,
            port,
        })
    }

    /// Read the section for `environment` from a YAML file, defaults when the file is absent
    fn load_file(path: &Path, environment: &str) -> Result<PipelineConfig> {
        if !path.exists() {
            info!("{} not found, using default pipeline settings", path.display());
            return Ok(PipelineConfig::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file: ConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        let section = match environment {
            "production" => file.production,
            _ => file.local,
        };

        Ok(section.unwrap_or_default())
    }

    fn apply_env_overrides<F>(config: &mut PipelineConfig, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let strings = [
            ("CONNECTIVITY_PROBE_URL", &mut config.probe_url),
            ("ANALYSIS_WEBHOOK_URL", &mut config.webhook_url),
            ("HTML_ARTIFACT_URL", &mut config.html_artifact_url),
            ("PDF_ARTIFACT_URL", &mut config.pdf_artifact_url),
        ];
        for (key, field) in strings {
            if let Some(value) = lookup(key) {
                *field = value;
            }
        }

        if let Some(value) = lookup("DOWNLOAD_MAX_ATTEMPTS") {
            config.max_attempts = parse_var("DOWNLOAD_MAX_ATTEMPTS", &value)?;
        }
        let durations = [
            ("RETRY_DELAY_MS", &mut config.retry_delay_ms),
            ("ARTIFACT_DELAY_MS", &mut config.artifact_delay_ms),
            ("HTTP_TIMEOUT_SECS", &mut config.timeout_seconds),
        ];
        for (key, field) in durations {
            if let Some(value) = lookup(key) {
                *field = parse_var(key, &value)?;
            }
        }

        if config.max_attempts == 0 {
            anyhow::bail!("DOWNLOAD_MAX_ATTEMPTS must be at least 1");
        }

        Ok(())
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse::<T>()
        .with_context(|| format!("{} has an invalid value: {}", key, value))
}
