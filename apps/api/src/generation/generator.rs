//! Letter Generation — orchestrates the full generation pipeline.
//!
//! Flow: validate → extract_keywords → build prompt → text generator →
//!       impact score → refinement suggestion → response with metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::keywords::extract_keywords;
use crate::analysis::signals::word_count;
use crate::analysis::LetterAnalysis;
use crate::errors::AppError;
use crate::generation::prompts::{build_generation_prompt, build_refinement_prompt, GENERATION_SYSTEM};
use crate::generation::refine::Refinement;
use crate::generation::tone::resolve_tone;
use crate::llm_client::TextGenerator;

/// Shortest accepted job description, in characters after trimming.
pub const MIN_JOB_DESCRIPTION_CHARS: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Request body for letter generation. Every field is optional on the wire so
/// validation can answer with a 400 instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub job_description: Option<String>,
    pub tone: Option<String>,
    pub key_strength: Option<String>,
    /// Present together with `existing_letter` when the client asks for a revision.
    pub refinement_type: Option<String>,
    pub existing_letter: Option<String>,
}

/// Descriptive numbers about the generated letter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterMetadata {
    pub word_count: usize,
    pub character_count: usize,
    pub generated_at: DateTime<Utc>,
    pub tone: String,
    pub keywords_found: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refinement_type: Option<String>,
}

/// Response from the generation pipeline.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub letter_content: String,
    #[serde(flatten)]
    pub analysis: LetterAnalysis,
    pub metadata: LetterMetadata,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Checks the job description and returns it unchanged when acceptable.
pub fn validate_job_description(job_description: Option<&str>) -> Result<&str, AppError> {
    let job_description = job_description
        .filter(|jd| !jd.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Valid job description is required".to_string()))?;

    if job_description.trim().chars().count() < MIN_JOB_DESCRIPTION_CHARS {
        return Err(AppError::Validation(format!(
            "Job description must be at least {MIN_JOB_DESCRIPTION_CHARS} characters long"
        )));
    }

    Ok(job_description)
}

/// Runs the full generation pipeline.
///
/// Steps:
/// 1. validate the job description
/// 2. extract_keywords() → Vec<String>
/// 3. build the generation (or refinement) prompt
/// 4. text generator → letter text (empty text is an error)
/// 5. LetterAnalysis::for_keywords() → score, rating, suggestion
pub async fn generate_letter(
    llm: &dyn TextGenerator,
    request: GenerateRequest,
) -> Result<GenerateResponse, AppError> {
    // Step 1: Validate
    let job_description = validate_job_description(request.job_description.as_deref())?;
    let tone = resolve_tone(request.tone.as_deref());
    let key_strength = request.key_strength.as_deref();
    let refinement = Refinement::from_request(
        request.refinement_type.as_deref(),
        request.existing_letter.as_deref(),
    );

    info!(
        "Generating cover letter: jd_len={}, tone={}, key_strength={}, refinement={}",
        job_description.len(),
        tone,
        key_strength.map(|s| !s.trim().is_empty()).unwrap_or(false),
        refinement.map(|r| r.kind.id()).unwrap_or("none")
    );

    // Step 2: Keywords
    let keywords = extract_keywords(job_description);

    // Step 3: Prompt
    let prompt = match &refinement {
        Some(refinement) => {
            build_refinement_prompt(job_description, &tone, key_strength, &keywords, refinement)
        }
        None => build_generation_prompt(job_description, &tone, key_strength, &keywords),
    };

    // Step 4: Generate
    let letter_content = llm.generate(&prompt, GENERATION_SYSTEM).await?;
    if letter_content.trim().is_empty() {
        return Err(AppError::Llm("Generated letter content is empty".to_string()));
    }

    // Step 5: Analyze
    let analysis = LetterAnalysis::for_keywords(&letter_content, keywords);
    info!(
        "Letter generated: length={}, impact_score={}",
        letter_content.len(),
        analysis.impact_score
    );

    let metadata = LetterMetadata {
        word_count: word_count(&letter_content),
        character_count: letter_content.chars().count(),
        generated_at: Utc::now(),
        tone,
        keywords_found: analysis.keywords.len(),
        refinement_type: refinement.map(|r| r.kind.id().to_string()),
    };

    Ok(GenerateResponse {
        letter_content,
        analysis,
        metadata,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
