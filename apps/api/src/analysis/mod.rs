// Letter analysis: keyword extraction, impact scoring, refinement suggestions.
// Pure, synchronous, no I/O. Shared state is limited to the constant catalog and
// lazily compiled regexes, so every function is safe to call from any request.

pub mod catalog;
pub mod impact;
pub mod keywords;
pub mod refinement;
pub mod signals;

use serde::Serialize;

use crate::analysis::impact::calculate_impact_score;
use crate::analysis::keywords::extract_keywords;
use crate::analysis::refinement::suggest_refinement;

/// Display label for an impact score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreRating {
    #[serde(rename = "Excellent!")]
    Excellent,
    #[serde(rename = "Very good!")]
    VeryGood,
    #[serde(rename = "Good foundation")]
    GoodFoundation,
    #[serde(rename = "Needs improvement")]
    NeedsImprovement,
}

impl ScoreRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => ScoreRating::Excellent,
            80..=89 => ScoreRating::VeryGood,
            70..=79 => ScoreRating::GoodFoundation,
            _ => ScoreRating::NeedsImprovement,
        }
    }
}

/// Everything the presentation layer shows next to a letter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterAnalysis {
    pub keywords: Vec<String>,
    pub impact_score: u8,
    pub rating: ScoreRating,
    pub refinement_suggestion: String,
}

impl LetterAnalysis {
    /// Scores and critiques `letter` against keywords already extracted from the job description.
    pub fn for_keywords(letter: &str, keywords: Vec<String>) -> Self {
        let impact_score = calculate_impact_score(letter, &keywords);
        let refinement_suggestion = suggest_refinement(letter, &keywords, impact_score);
        Self {
            rating: ScoreRating::from_score(impact_score),
            keywords,
            impact_score,
            refinement_suggestion,
        }
    }
}

/// Extract → score → suggest.
pub fn analyze_letter(job_description: &str, letter: &str) -> LetterAnalysis {
    LetterAnalysis::for_keywords(letter, extract_keywords(job_description))
}
