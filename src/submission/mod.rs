// src/submission/mod.rs
//! Document submission to the external workflow and report artifact retrieval

pub mod downloader;
pub mod pipeline;

pub use downloader::RetryDownloader;
pub use pipeline::SubmissionPipeline;
