//! Axum route handlers for the Letters API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::analysis::{analyze_letter, LetterAnalysis};
use crate::errors::AppError;
use crate::generation::generator::{
    generate_letter, validate_job_description, GenerateRequest, GenerateResponse,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub job_description: Option<String>,
    pub letter_content: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/letters/generate
///
/// Generates a letter for the job description, then scores it.
/// Also handles revisions when `refinementType` and `existingLetter` are sent.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let response = generate_letter(state.llm.as_ref(), request).await?;
    Ok(Json(response))
}

/// POST /api/v1/letters/analyze
///
/// Re-scores a letter (e.g. after the user edits it) without calling the provider.
pub async fn handle_analyze(
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<LetterAnalysis>, AppError> {
    let job_description = validate_job_description(request.job_description.as_deref())?;

    let letter = request
        .letter_content
        .as_deref()
        .filter(|l| !l.trim().is_empty())
        .ok_or_else(|| AppError::Validation("letterContent cannot be empty".to_string()))?;

    Ok(Json(analyze_letter(job_description, letter)))
}
