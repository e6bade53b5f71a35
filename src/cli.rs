// src/cli.rs
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::core::ConfigManager;
use crate::submission::SubmissionPipeline;
use crate::types::Document;

#[derive(Parser)]
#[command(name = "cvmatch")]
#[command(about = "Score CVs against job descriptions and fetch workflow reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP API server
    Serve,
    /// Score a CV against a job description locally
    Analyze {
        #[arg(long)]
        cv: PathBuf,
        #[arg(long)]
        job: PathBuf,
        #[arg(long, default_value = "")]
        title: String,
    },
    /// Submit both documents to the analysis workflow and fetch its reports
    Submit {
        #[arg(long)]
        cv: PathBuf,
        #[arg(long)]
        jd: PathBuf,
    },
}

/// Only `serve` and `submit` read the pipeline configuration
pub async fn handle_command(command: Command) -> Result<()> {
    match command {
        Command::Serve => crate::start_web_server(ConfigManager::load()?).await,
        Command::Analyze { cv, job, title } => {
            let cv_text = read_text(&cv).await?;
            let job_text = read_text(&job).await?;

            let assessment = crate::analyze_compatibility(&cv_text, &job_text, &title);
            println!("{}", serde_json::to_string_pretty(&assessment)?);
            Ok(())
        }
        Command::Submit { cv, jd } => {
            let config = ConfigManager::load()?;
            let cv_doc = load_document(&cv).await?;
            let jd_doc = load_document(&jd).await?;

            let pipeline = SubmissionPipeline::new(config.pipeline)
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;
            let outcome = pipeline.submit(&cv_doc, &jd_doc).await;

            info!(
                "Retrieved {} of 2 reports ({} log entries)",
                outcome.artifact_count(),
                outcome.retry_log.len()
            );
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            Ok(())
        }
    }
}

async fn read_text(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

async fn load_document(path: &Path) -> Result<Document> {
    let content = read_text(path).await?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("document")
        .to_string();

    Ok(Document::new(file_name, content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_command() {
        let cli = Cli::try_parse_from([
            "cvmatch", "analyze", "--cv", "cv.txt", "--job", "job.txt", "--title", "Dev",
        ])
        .unwrap();

        match cli.command {
            Command::Analyze { cv, job, title } => {
                assert_eq!(cv, PathBuf::from("cv.txt"));
                assert_eq!(job, PathBuf::from("job.txt"));
                assert_eq!(title, "Dev");
            }
            _ => panic!("expected analyze command"),
        }
        assert!(!cli.json_logs);
    }

    #[test]
    fn test_submit_requires_both_documents() {
        assert!(Cli::try_parse_from(["cvmatch", "submit", "--cv", "cv.txt"]).is_err());
        let cli =
            Cli::try_parse_from(["cvmatch", "--json-logs", "submit", "--cv", "a", "--jd", "b"])
                .unwrap();
        assert!(cli.json_logs);
    }

    #[tokio::test]
    async fn test_load_document_uses_file_name() {
        let path = std::env::temp_dir().join("cvmatch_cli_test_cv.txt");
        tokio::fs::write(&path, "Rust developer").await.unwrap();

        let doc = load_document(&path).await.unwrap();
        assert_eq!(doc.metadata.file_name, "cvmatch_cli_test_cv.txt");
        assert_eq!(doc.metadata.file_size, 14);

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_analyze_ignores_invalid_pipeline_config() {
        let dir = std::env::temp_dir();
        let cv = dir.join("cvmatch_cli_config_cv.txt");
        let job = dir.join("cvmatch_cli_config_job.txt");
        tokio::fs::write(&cv, "5 years of Rust").await.unwrap();
        tokio::fs::write(&job, "Rust engineer").await.unwrap();

        std::env::set_var("ARTIFACT_DELAY_MS", "later");

        let analyzed = handle_command(Command::Analyze {
            cv: cv.clone(),
            job: job.clone(),
            title: "Engineer".to_string(),
        })
        .await;
        let submitted = handle_command(Command::Submit {
            cv: cv.clone(),
            jd: job.clone(),
        })
        .await;

        std::env::remove_var("ARTIFACT_DELAY_MS");
        tokio::fs::remove_file(&cv).await.unwrap();
        tokio::fs::remove_file(&job).await.unwrap();

        assert!(analyzed.is_ok());
        let err = submitted.unwrap_err();
        assert!(format!("{:#}", err).contains("ARTIFACT_DELAY_MS"));
    }

    #[tokio::test]
    async fn test_read_text_reports_missing_file() {
        let err = read_text(Path::new("/nonexistent/cv.txt")).await.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/cv.txt"));
    }
}
