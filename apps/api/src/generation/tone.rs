//! Writing tone — the user's style choice, with guidance text fed to the prompt.
//!
//! Known tones carry a description of what the style means. Anything else the
//! client sends is passed to the model verbatim.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TONE: &str = "Professional & Formal";

/// Tone presets offered by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterTone {
    #[serde(rename = "Professional & Formal")]
    ProfessionalFormal,
    #[serde(rename = "Friendly & Conversational")]
    FriendlyConversational,
    #[serde(rename = "Bold & Assertive")]
    BoldAssertive,
    #[serde(rename = "Problem-Solution Focused")]
    ProblemSolution,
    #[serde(rename = "Direct to Hiring Manager / Formal to HR")]
    RecipientAware,
}

const ALL_TONES: [LetterTone; 5] = [
    LetterTone::ProfessionalFormal,
    LetterTone::FriendlyConversational,
    LetterTone::BoldAssertive,
    LetterTone::ProblemSolution,
    LetterTone::RecipientAware,
];

impl LetterTone {
    pub fn label(&self) -> &'static str {
        match self {
            LetterTone::ProfessionalFormal => "Professional & Formal",
            LetterTone::FriendlyConversational => "Friendly & Conversational",
            LetterTone::BoldAssertive => "Bold & Assertive",
            LetterTone::ProblemSolution => "Problem-Solution Focused",
            LetterTone::RecipientAware => "Direct to Hiring Manager / Formal to HR",
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            LetterTone::ProfessionalFormal => "Traditional, business-appropriate language suitable for corporate environments and traditional industries.",
            LetterTone::FriendlyConversational => "Warm, approachable tone ideal for creative industries, startups, and modern companies.",
            LetterTone::BoldAssertive => "Confident language that emphasizes achievements and leadership qualities for competitive roles.",
            LetterTone::ProblemSolution => "Analytical approach highlighting your ability to identify challenges and implement solutions.",
            LetterTone::RecipientAware => "Tailored approach that adapts based on the intended recipient of your application.",
        }
    }

    /// Case-insensitive lookup by display label.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        ALL_TONES
            .into_iter()
            .find(|tone| tone.label().eq_ignore_ascii_case(label))
    }
}

/// Normalizes a requested tone: blank → default, known → canonical label, unknown → as given.
pub fn resolve_tone(requested: Option<&str>) -> String {
    match requested.map(str::trim).filter(|t| !t.is_empty()) {
        None => DEFAULT_TONE.to_string(),
        Some(t) => LetterTone::from_label(t)
            .map(|tone| tone.label().to_string())
            .unwrap_or_else(|| t.to_string()),
    }
}

/// Prompt guidance for a tone label, if it is a known preset.
pub fn tone_guidance(label: &str) -> Option<&'static str> {
    LetterTone::from_label(label).map(|tone| tone.guidance())
}
