// src/types/assessment.rs
use serde::{Deserialize, Serialize};

/// Normalized job-description keyword with its morphological variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub keyword: String,
    pub variants: Vec<String>,
}

/// Partition of a term set into terms found in the CV and terms that are not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: Vec<Term>,
    pub missing: Vec<Term>,
}

impl MatchResult {
    pub fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn matched_keywords(&self) -> Vec<String> {
        self.matched.iter().map(|t| t.keyword.clone()).collect()
    }

    pub fn missing_keywords(&self) -> Vec<String> {
        self.missing.iter().map(|t| t.keyword.clone()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityAssessment {
    pub score: u32,
    pub matched_terms: Vec<String>,
    pub missing_terms: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    pub executive_summary: String,
}
