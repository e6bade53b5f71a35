// src/matching/mod.rs
//! Keyword matching, scoring and narrative generation for CV/job comparisons

pub mod narrative;
pub mod scorer;
pub mod term_matcher;

pub use narrative::{generate_narrative, Narrative};
pub use scorer::score;
pub use term_matcher::{extract_terms, match_terms};
