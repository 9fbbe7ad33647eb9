//! Keyword Extractor — catalog matches plus frequent words from a job description.
//!
//! Algorithm:
//! 1. Lower-case the text.
//! 2. Collect every catalog term that occurs as a substring, in catalog order.
//! 3. Tokenize into runs of ASCII word characters; keep runs of 4+ letters `a`–`z`
//!    that are not stop words.
//! 4. Keep tokens seen at least twice, sorted by descending count (ties: first seen), top 10.
//! 5. Union (2) then (4), dedupe case-insensitively, cap at `MAX_KEYWORDS`.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::catalog::{self, is_stop_word};

/// Hard cap on the number of keywords returned.
pub const MAX_KEYWORDS: usize = 15;
/// Number of frequency-derived words merged after catalog matches.
const MAX_FREQUENT_WORDS: usize = 10;
const MIN_TOKEN_LEN: usize = 4;
const MIN_TOKEN_FREQUENCY: u32 = 2;

/// ASCII word runs. A run qualifies as a token only if it is entirely `a`–`z`.
static WORD_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9_]+").unwrap());

/// Extracts up to `MAX_KEYWORDS` unique keywords from `source_text`.
/// Empty input yields an empty vector.
pub fn extract_keywords(source_text: &str) -> Vec<String> {
    let lowered = source_text.to_lowercase();

    let catalog_matches = catalog::terms().filter(|term| lowered.contains(term));
    let frequent = frequent_words(&lowered);

    let mut seen = HashSet::new();
    catalog_matches
        .map(str::to_string)
        .chain(frequent)
        .filter(|kw| seen.insert(kw.to_lowercase()))
        .take(MAX_KEYWORDS)
        .collect()
}

/// Tokens of `lowered` that appear at least twice, most frequent first.
fn frequent_words(lowered: &str) -> Vec<String> {
    // (token, count) in first-seen order; the index map points into it.
    let mut counts: Vec<(&str, u32)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for token in tokenize(lowered) {
        match index.get(token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token, counts.len());
                counts.push((token, 1));
            }
        }
    }

    counts.retain(|&(_, count)| count >= MIN_TOKEN_FREQUENCY);
    // Stable: equal counts keep first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(MAX_FREQUENT_WORDS)
        .map(|(word, _)| word.to_string())
        .collect()
}

fn tokenize(lowered: &str) -> impl Iterator<Item = &str> {
    WORD_RUN_RE
        .find_iter(lowered)
        .map(|m| m.as_str())
        .filter(|run| run.len() >= MIN_TOKEN_LEN && run.bytes().all(|b| b.is_ascii_lowercase()))
        .filter(|word| !is_stop_word(word))
}
