// src/matching/narrative.rs
//! Rule-table narrative for a compatibility assessment.
//!
//! Every rule is a fixed condition over the score, the match counts or the CV
//! text, paired with a fixed sentence. Output depends only on the inputs.

use serde::Serialize;

use crate::types::MatchResult;

pub const MAX_STRENGTHS: usize = 6;
pub const MAX_WEAKNESSES: usize = 6;
pub const MAX_RECOMMENDATIONS: usize = 8;

pub const LOW_SCORE_WEAKNESS: &str = "Low overall match with the job requirements";
pub const KEYWORD_RECOMMENDATION: &str =
    "Incorporate relevant keywords from the job description into your CV";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Narrative {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    pub summary: String,
}

/// Inputs every rule may inspect
struct Facts<'a> {
    score: u32,
    matched: usize,
    missing: usize,
    cv: &'a str,
}

impl Facts<'_> {
    fn mentions(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.cv.contains(n))
    }
}

type Rule = (fn(&Facts) -> bool, &'static str);

const STRENGTH_RULES: &[Rule] = &[
    (|f| f.score >= 80, "Excellent overall alignment with the role requirements"),
    (|f| (60..80).contains(&f.score), "Good alignment with the core role requirements"),
    (|f| f.matched >= 10, "Broad coverage of the keywords in the job description"),
    (|f| (5..10).contains(&f.matched), "Covers a solid share of the role's key terms"),
    (|f| f.matched > 0 && f.mentions(&["lead", "managed", "mentor"]), "Demonstrated leadership experience"),
    (|f| f.matched > 0 && f.mentions(&["certified", "certification"]), "Holds relevant professional certifications"),
    (|f| f.matched > 0 && f.mentions(&["project"]), "Track record of delivering projects"),
    (|f| f.matched > 0 && f.mentions(&["team", "collaborat"]), "Experience working in collaborative teams"),
    (|f| f.matched > 0 && f.mentions(&["degree", "bachelor", "master", "phd"]), "Formal academic qualifications"),
];

const WEAKNESS_RULES: &[Rule] = &[
    (|f| f.score < 50, LOW_SCORE_WEAKNESS),
    (|f| (50..70).contains(&f.score), "Noticeable gaps against the job requirements"),
    (|f| f.missing >= 10, "Many requirements from the job description are not reflected in the CV"),
    (|f| (3..10).contains(&f.missing), "Several key terms from the job description are missing"),
    (|f| !f.mentions(&["years"]), "Years of experience are not stated explicitly"),
    (|f| !f.mentions(&["%"]), "Achievements are not quantified"),
    (|f| !f.mentions(&["skill"]), "No dedicated skills section detected"),
];

const RECOMMENDATION_RULES: &[Rule] = &[
    (|f| f.score < 70 || f.missing > 0, KEYWORD_RECOMMENDATION),
    (|f| f.missing > 0, "Highlight any experience you have with the missing requirements"),
    (|f| f.score < 50, "Tailor the CV more closely to this specific role"),
    (|f| !f.mentions(&["%"]), "Quantify achievements with concrete metrics"),
    (|f| !f.mentions(&["years"]), "State your years of experience explicitly"),
    (|f| !f.mentions(&["summary", "profile"]), "Add a professional summary tailored to the role"),
    (|f| !f.mentions(&["project"]), "Describe key projects and their outcomes"),
    (|f| !f.mentions(&["certified", "certification"]), "Consider listing relevant certifications"),
    (|f| !f.mentions(&["skill"]), "Add a skills section listing your core competencies"),
    (|f| !f.mentions(&["led", "built", "developed", "delivered"]), "Use strong action verbs to describe your responsibilities"),
];

fn apply(rules: &[Rule], facts: &Facts, cap: usize) -> Vec<String> {
    rules
        .iter()
        .filter(|(condition, _)| condition(facts))
        .map(|(_, text)| text.to_string())
        .take(cap)
        .collect()
}

/// Qualitative band for a score
pub fn band(score: u32) -> &'static str {
    match score {
        80.. => "excellent",
        70..=79 => "good",
        50..=69 => "moderate",
        _ => "limited",
    }
}

pub fn executive_summary(score: u32, job_title: &str, matched: usize, missing: usize) -> String {
    let title = if job_title.trim().is_empty() {
        "target"
    } else {
        job_title.trim()
    };

    format!(
        "The candidate shows {} compatibility ({}/100) with the {} position, matching {} key terms from the job description with {} missing.",
        band(score),
        score,
        title,
        matched,
        missing
    )
}

pub fn generate_narrative(
    result: &MatchResult,
    score: u32,
    cv_text: &str,
    job_title: &str,
) -> Narrative {
    let cv = cv_text.to_lowercase();
    let facts = Facts {
        score,
        matched: result.matched.len(),
        missing: result.missing.len(),
        cv: &cv,
    };

    Narrative {
        strengths: apply(STRENGTH_RULES, &facts, MAX_STRENGTHS),
        weaknesses: apply(WEAKNESS_RULES, &facts, MAX_WEAKNESSES),
        recommendations: apply(RECOMMENDATION_RULES, &facts, MAX_RECOMMENDATIONS),
        summary: executive_summary(score, job_title, facts.matched, facts.missing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{extract_terms, match_terms, score};

    #[test]
    fn test_empty_job_text_narrative() {
        let result = match_terms(&extract_terms(""), "Senior lead with 10 years of experience");
        let narrative = generate_narrative(&result, 0, "Senior lead with 10 years of experience", "Engineer");

        assert!(narrative.strengths.is_empty());
        assert!(narrative.weaknesses.contains(&LOW_SCORE_WEAKNESS.to_string()));
        assert!(narrative.recommendations.contains(&KEYWORD_RECOMMENDATION.to_string()));
    }

    #[test]
    fn test_caps_hold_for_large_inputs() {
        let job: String = (0..200).map(|i| format!("requirement{} ", i)).collect();
        let cv: String = (0..100).map(|i| format!("requirement{} ", i)).collect::<String>()
            + " lead team degree";
        let result = match_terms(&extract_terms(&job), &cv);
        let s = score(&result, &cv);
        let narrative = generate_narrative(&result, s, &cv, "Engineer");

        assert!(narrative.strengths.len() <= MAX_STRENGTHS);
        assert!(narrative.weaknesses.len() <= MAX_WEAKNESSES);
        assert!(narrative.recommendations.len() <= MAX_RECOMMENDATIONS);
        assert_eq!(narrative.recommendations.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_strong_profile_strengths() {
        let job = "Rust Kubernetes Terraform Postgres Kafka gRPC Linux Docker Prometheus Grafana";
        let cv = "Summary: tech lead. I led a team that built Rust services on Kubernetes with Terraform, \
                  Postgres, Kafka, gRPC, Linux, Docker, Prometheus and Grafana. 8 years. \
                  Certified. Skills listed. Project cut costs by 30%. Master degree.";
        let result = match_terms(&extract_terms(job), cv);
        assert_eq!(result.matched.len(), 10);

        let narrative = generate_narrative(&result, 100, cv, "Platform Engineer");
        assert_eq!(
            narrative.strengths,
            vec![
                "Excellent overall alignment with the role requirements",
                "Broad coverage of the keywords in the job description",
                "Demonstrated leadership experience",
                "Holds relevant professional certifications",
                "Track record of delivering projects",
                "Experience working in collaborative teams",
            ]
        );
        assert!(narrative.weaknesses.is_empty());
        assert!(narrative.recommendations.is_empty());
    }

    #[test]
    fn test_bands() {
        assert_eq!(band(100), "excellent");
        assert_eq!(band(80), "excellent");
        assert_eq!(band(79), "good");
        assert_eq!(band(70), "good");
        assert_eq!(band(50), "moderate");
        assert_eq!(band(49), "limited");
        assert_eq!(band(0), "limited");
    }

    #[test]
    fn test_summary_interpolates_fields() {
        let summary = executive_summary(72, "Data Engineer", 5, 2);
        assert_eq!(
            summary,
            "The candidate shows good compatibility (72/100) with the Data Engineer position, matching 5 key terms from the job description with 2 missing."
        );
    }

    #[test]
    fn test_narrative_is_deterministic() {
        let job = "Backend developer with Go, SQL and cloud experience";
        let cv = "Go developer, 4 years, SQL";
        let result = match_terms(&extract_terms(job), cv);
        let s = score(&result, cv);

        assert_eq!(
            generate_narrative(&result, s, cv, "Backend Developer"),
            generate_narrative(&result, s, cv, "Backend Developer")
        );
    }
}
