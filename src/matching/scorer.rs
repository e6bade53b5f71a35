// src/matching/scorer.rs
use tracing::debug;

use crate::types::MatchResult;

pub const MAX_SCORE: u32 = 100;

/// Seniority signal words and their bonus
const EXPERIENCE_WORDS: [&str; 6] = ["years", "experience", "senior", "lead", "manager", "director"];
const EXPERIENCE_BONUS: u32 = 2;

/// Skill signal words and their bonus
const SKILL_WORDS: [&str; 5] = ["skill", "proficient", "expert", "advanced", "certified"];
const SKILL_BONUS: u32 = 3;

/// Compatibility score in `0..=100`.
///
/// The base is the rounded percentage of matched terms. Each experience word
/// present anywhere in the CV adds 2 and each skill word adds 3, once per word.
/// An empty term set scores 0 with no bonus.
pub fn score(result: &MatchResult, cv_text: &str) -> u32 {
    let total = result.total();
    if total == 0 {
        return 0;
    }

    let base = (100.0 * result.matched.len() as f64 / total as f64).round() as u32;
    let bonus = keyword_bonus(cv_text);
    let score = (base + bonus).min(MAX_SCORE);

    debug!(base, bonus, score, "computed compatibility score");
    score
}

/// Bonus points for signal words found in the CV text
pub fn keyword_bonus(cv_text: &str) -> u32 {
    let text = cv_text.to_lowercase();
    let count = |words: &[&str]| words.iter().filter(|w| text.contains(*w)).count() as u32;

    count(&EXPERIENCE_WORDS) * EXPERIENCE_BONUS + count(&SKILL_WORDS) * SKILL_BONUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{extract_terms, match_terms};

    fn result_with(matched: usize, missing: usize) -> MatchResult {
        let mut text = String::new();
        for i in 0..matched {
            text.push_str(&format!("matchword{} ", i));
        }
        for i in 0..missing {
            text.push_str(&format!("absentterm{} ", i));
        }
        let terms = extract_terms(&text);
        match_terms(&terms, &text.replace("absentterm", "zzz"))
    }

    #[test]
    fn test_empty_terms_score_zero() {
        assert_eq!(score(&MatchResult::default(), "senior expert with years of experience"), 0);
    }

    #[test]
    fn test_base_is_rounded_ratio() {
        let result = result_with(1, 2);
        assert_eq!(result.matched.len(), 1);
        assert_eq!(score(&result, "nothing relevant"), 33);

        let result = result_with(2, 1);
        assert_eq!(score(&result, "nothing relevant"), 67);
    }

    #[test]
    fn test_keyword_bonus_values() {
        assert_eq!(keyword_bonus(""), 0);
        assert_eq!(keyword_bonus("Senior developer"), 2);
        assert_eq!(keyword_bonus("PROFICIENT in Go"), 3);
        // each word counts once regardless of repetitions
        assert_eq!(keyword_bonus("years years years"), 2);
        assert_eq!(
            keyword_bonus("years experience senior lead manager director skill proficient expert advanced certified"),
            27
        );
    }

    #[test]
    fn test_score_clamped_to_hundred() {
        let result = result_with(3, 0);
        assert_eq!(score(&result, "senior expert certified director"), 100);
    }

    #[test]
    fn test_score_monotonic_in_matched_terms() {
        let cv = "lead engineer";
        let mut previous = 0;
        for matched in 0..=6 {
            let current = score(&result_with(matched, 6 - matched), cv);
            assert!(current >= previous, "{} < {}", current, previous);
            assert!(current <= MAX_SCORE);
            previous = current;
        }
    }

    #[test]
    fn test_senior_engineer_scenario() {
        let terms =
            extract_terms("Senior Software Engineer with 5 years experience in React and Node.js");
        let cv = "I have 5 years of experience and am proficient in React development";
        let result = match_terms(&terms, cv);

        let matched = result.matched_keywords();
        for keyword in ["react", "experience", "years"] {
            assert!(matched.contains(&keyword.to_string()), "{} not matched", keyword);
        }
        assert_eq!(result.matched.len(), 3);
        assert_eq!(result.total(), 7);

        // round(300 / 7) = 43, plus years (+2), experience (+2), proficient (+3)
        assert_eq!(score(&result, cv), 50);
    }
}
