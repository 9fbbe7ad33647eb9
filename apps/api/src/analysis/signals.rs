//! Structural signals — regex-detectable features used as proxies for letter quality.
//!
//! All patterns are case-insensitive and unanchored, so "best" also fires on
//! "bestow" and "led" on "skilled". That looseness is part of the scoring contract.

use once_cell::sync::Lazy;
use regex::Regex;

static OPENING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)dear|hello|greetings").unwrap());

static CLOSING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)sincerely|regards|best|thank you").unwrap());

static QUANTIFIED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\$|%|[0-9]+\s*(years?|months?|projects?|clients?|customers?|percent)")
        .unwrap()
});

/// Verb list used when scoring.
static ACTION_VERB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)led|managed|developed|created|implemented|increased|reduced|improved|achieved|delivered",
    )
    .unwrap()
});

/// Narrower verb list used when deciding whether to suggest more action verbs.
static SUGGESTION_VERB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)led|managed|developed|created|implemented|increased|reduced|improved").unwrap()
});

const PARAGRAPH_SEPARATOR: &str = "\n\n";
const MIN_PARAGRAPHS: usize = 3;

pub const OPENING_POINTS: u8 = 3;
pub const CLOSING_POINTS: u8 = 3;
pub const PARAGRAPH_POINTS: u8 = 3;
pub const QUANTIFIED_POINTS: u8 = 4;
pub const ACTION_VERB_POINTS: u8 = 2;

/// Which structural signals a letter exhibits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructuralSignals {
    pub has_opening: bool,
    pub has_closing: bool,
    pub has_paragraphs: bool,
    pub has_quantified_evidence: bool,
    pub has_action_verbs: bool,
}

impl StructuralSignals {
    pub fn detect(letter: &str) -> Self {
        Self {
            has_opening: OPENING_RE.is_match(letter),
            has_closing: CLOSING_RE.is_match(letter),
            has_paragraphs: letter.split(PARAGRAPH_SEPARATOR).count() >= MIN_PARAGRAPHS,
            has_quantified_evidence: has_quantified_evidence(letter),
            has_action_verbs: ACTION_VERB_RE.is_match(letter),
        }
    }

    /// Sum of the points for each signal present. At most 15.
    pub fn points(&self) -> u8 {
        [
            (self.has_opening, OPENING_POINTS),
            (self.has_closing, CLOSING_POINTS),
            (self.has_paragraphs, PARAGRAPH_POINTS),
            (self.has_quantified_evidence, QUANTIFIED_POINTS),
            (self.has_action_verbs, ACTION_VERB_POINTS),
        ]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, points)| points)
        .sum()
    }
}

/// Dollar amounts, percentages, or counted years/projects/clients.
pub fn has_quantified_evidence(letter: &str) -> bool {
    QUANTIFIED_RE.is_match(letter)
}

pub fn has_suggestion_action_verbs(letter: &str) -> bool {
    SUGGESTION_VERB_RE.is_match(letter)
}

/// Whitespace-separated word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Keywords that occur (case-insensitively) anywhere in `letter`, and those that do not.
pub fn partition_keywords<'a>(letter: &str, keywords: &'a [String]) -> (Vec<&'a str>, Vec<&'a str>) {
    let lowered = letter.to_lowercase();
    keywords
        .iter()
        .map(String::as_str)
        .partition(|kw| lowered.contains(&kw.to_lowercase()))
}
