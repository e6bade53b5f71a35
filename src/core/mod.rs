// src/core/mod.rs
//! Shared services used by the submission pipeline and the entry points

pub mod config_manager;
pub mod service_client;

pub use config_manager::{ConfigManager, PipelineConfig};
pub use service_client::ServiceClient;
