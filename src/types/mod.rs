// src/types/mod.rs
//! Plain data exchanged between the core and its callers

pub mod assessment;
pub mod document;
pub mod outcome;

pub use assessment::{CompatibilityAssessment, MatchResult, Term};
pub use document::{Document, DocumentMetadata};
pub use outcome::{AttemptStatus, RetryLogEntry, SubmissionOutcome};
