//! Refinement Suggestion Generator — one improvement hint for a scored letter.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::analysis::signals::{
    has_quantified_evidence, has_suggestion_action_verbs, partition_keywords, word_count,
};

const LOW_SCORE_THRESHOLD: u8 = 70;
const SHORT_LETTER_WORDS: usize = 200;
const MAX_MISSING_LISTED: usize = 3;

pub const ADD_ACHIEVEMENTS: &str =
    "Consider adding more specific achievements with quantifiable results";
pub const EXPAND_DETAIL: &str = "Expand your letter with more detailed examples and explanations";
pub const ADD_METRICS: &str =
    "Include specific metrics or numbers to strengthen your achievements";
pub const USE_ACTION_VERBS: &str = "Use more action verbs to make your accomplishments stand out";
pub const MISSING_TERMS_PREFIX: &str = "Try incorporating more key terms from the job description";
pub const LOOKS_STRONG: &str =
    "Your cover letter looks strong! Consider personalizing it further for the specific company.";

/// Every suggestion whose predicate fires, in fixed priority order.
pub fn refinement_candidates(letter: &str, keywords: &[String], impact_score: u8) -> Vec<String> {
    let mut candidates = Vec::new();

    if impact_score < LOW_SCORE_THRESHOLD {
        candidates.push(ADD_ACHIEVEMENTS.to_string());
    }

    if word_count(letter) < SHORT_LETTER_WORDS {
        candidates.push(EXPAND_DETAIL.to_string());
    }

    if !has_quantified_evidence(letter) {
        candidates.push(ADD_METRICS.to_string());
    }

    if !has_suggestion_action_verbs(letter) {
        candidates.push(USE_ACTION_VERBS.to_string());
    }

    let (_, missing) = partition_keywords(letter, keywords);
    // More than half missing.
    if missing.len() * 2 > keywords.len() {
        let listed: Vec<&str> = missing.into_iter().take(MAX_MISSING_LISTED).collect();
        candidates.push(format!("{MISSING_TERMS_PREFIX}: {}", listed.join(", ")));
    }

    candidates
}

/// Picks one qualifying suggestion at random, or the fallback when nothing fires.
pub fn suggest_refinement(letter: &str, keywords: &[String], impact_score: u8) -> String {
    suggest_refinement_with_rng(letter, keywords, impact_score, &mut rand::thread_rng())
}

pub fn suggest_refinement_with_rng<R: Rng + ?Sized>(
    letter: &str,
    keywords: &[String],
    impact_score: u8,
    rng: &mut R,
) -> String {
    refinement_candidates(letter, keywords, impact_score)
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| LOOKS_STRONG.to_string())
}
