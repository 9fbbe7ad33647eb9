//! Impact Scorer — heuristic 60–95 quality estimate for a generated letter.
//!
//! score = 60 + keyword coverage (0–20) + length (0–15) + structure (0–15) + jitter (±3),
//! clamped to [60, 95]. The jitter is intentional non-determinism; callers that need
//! reproducible output pass their own seeded `Rng`.

use rand::Rng;

use crate::analysis::signals::{partition_keywords, word_count, StructuralSignals};

pub const BASE_SCORE: i32 = 60;
pub const MIN_SCORE: u8 = 60;
pub const MAX_SCORE: u8 = 95;
pub const MAX_JITTER: i32 = 3;

/// Deterministic sub-scores plus the random jitter that was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub base: i32,
    pub keyword_bonus: i32,
    pub length_bonus: i32,
    pub structure_bonus: i32,
    pub jitter: i32,
}

impl ScoreBreakdown {
    /// Computes every sub-score with zero jitter.
    pub fn compute(letter: &str, keywords: &[String]) -> Self {
        Self {
            base: BASE_SCORE,
            keyword_bonus: keyword_bonus(letter, keywords),
            length_bonus: length_bonus(word_count(letter)),
            structure_bonus: i32::from(StructuralSignals::detect(letter).points()),
            jitter: 0,
        }
    }

    pub fn with_jitter(self, jitter: i32) -> Self {
        Self {
            jitter: jitter.clamp(-MAX_JITTER, MAX_JITTER),
            ..self
        }
    }

    /// Sum before clamping. Can exceed 95 or (with jitter) dip below 60.
    pub fn raw_total(&self) -> i32 {
        self.base + self.keyword_bonus + self.length_bonus + self.structure_bonus + self.jitter
    }

    /// Final score in [60, 95].
    pub fn score(&self) -> u8 {
        self.raw_total()
            .clamp(i32::from(MIN_SCORE), i32::from(MAX_SCORE)) as u8
    }
}

/// Scores `letter` against `keywords` using the thread-local RNG for jitter.
pub fn calculate_impact_score(letter: &str, keywords: &[String]) -> u8 {
    calculate_impact_score_with_rng(letter, keywords, &mut rand::thread_rng())
}

pub fn calculate_impact_score_with_rng<R: Rng + ?Sized>(
    letter: &str,
    keywords: &[String],
    rng: &mut R,
) -> u8 {
    score_breakdown_with_rng(letter, keywords, rng).score()
}

/// Full breakdown with a jitter drawn uniformly from [-3, 3].
pub fn score_breakdown_with_rng<R: Rng + ?Sized>(
    letter: &str,
    keywords: &[String],
    rng: &mut R,
) -> ScoreBreakdown {
    ScoreBreakdown::compute(letter, keywords).with_jitter(rng.gen_range(-MAX_JITTER..=MAX_JITTER))
}

/// 0–20 points for the share of keywords present in the letter.
fn keyword_bonus(letter: &str, keywords: &[String]) -> i32 {
    if keywords.is_empty() {
        return 0;
    }
    let (found, _) = partition_keywords(letter, keywords);
    let ratio = found.len() as f64 / keywords.len() as f64;

    if ratio >= 0.8 {
        20
    } else if ratio >= 0.6 {
        15
    } else if ratio >= 0.4 {
        10
    } else if ratio >= 0.2 {
        5
    } else {
        0
    }
}

/// 0–15 points by word count. 300–600 words is the sweet spot.
fn length_bonus(words: usize) -> i32 {
    match words {
        0..=149 => 0,
        150..=199 => 8,
        200..=299 => 12,
        300..=600 => 15,
        601..=800 => 10,
        _ => 5,
    }
}
