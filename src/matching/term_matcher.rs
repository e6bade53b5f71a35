// src/matching/term_matcher.rs
use std::collections::HashSet;

use crate::types::{MatchResult, Term};

const MIN_TERM_LEN: usize = 3;

const SUFFIXES: [&str; 5] = ["s", "ing", "ed", "er", "ly"];
const STRIPPED_SUFFIXES: [&str; 3] = ["ing", "ed", "s"];

const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had", "her", "was",
    "one", "our", "out", "has", "him", "his", "how", "its", "may", "new", "now", "see", "who",
    "did", "get", "let", "put", "say", "she", "too", "use", "way", "with", "this", "that",
    "from", "they", "will", "have", "been", "were", "said", "each", "which", "their", "what",
    "about", "would", "there", "could", "other", "into", "more", "your", "also", "than", "them",
    "these", "some", "must", "should", "such", "when", "where", "while",
];

/// Extract deduplicated keyword terms from a job description.
///
/// Tokens are split on non-word characters, lowercased, and kept when longer
/// than two characters and not a stop word. First occurrence order is kept.
pub fn extract_terms(job_text: &str) -> Vec<Term> {
    let mut seen = HashSet::new();

    job_text
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .map(str::to_lowercase)
        .filter(|token| token.chars().count() >= MIN_TERM_LEN)
        .filter(|token| !STOP_WORDS.contains(&token.as_str()))
        .filter(|token| seen.insert(token.clone()))
        .map(|token| Term {
            variants: variants_of(&token),
            keyword: token,
        })
        .collect()
}

/// Surface forms tried when looking for a term in the CV text
fn variants_of(token: &str) -> Vec<String> {
    let mut variants = vec![token.to_string()];
    variants.extend(SUFFIXES.iter().map(|suffix| format!("{}{}", token, suffix)));
    variants.extend(
        STRIPPED_SUFFIXES
            .iter()
            .map(|suffix| token.strip_suffix(suffix).unwrap_or(token).to_string()),
    );

    // an empty stem would match any text
    let mut unique = HashSet::new();
    variants.retain(|v| !v.is_empty() && unique.insert(v.clone()));
    variants
}

/// Split terms into those with at least one variant present in the CV and those without.
pub fn match_terms(terms: &[Term], cv_text: &str) -> MatchResult {
    let haystack = cv_text.to_lowercase();
    let mut seen = HashSet::new();

    let (matched, missing): (Vec<Term>, Vec<Term>) = terms
        .iter()
        .filter(|term| seen.insert(term.keyword.as_str()))
        .cloned()
        .partition(|term| term.variants.iter().any(|v| haystack.contains(v.as_str())));

    MatchResult { matched, missing }
}
