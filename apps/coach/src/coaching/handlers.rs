//! Axum route handlers for the Interview API.
//!
//! Stateless: the caller sends the interview snapshot with every request and
//! stores whatever comes back.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Interview, InterviewResult, InterviewSettings, InterviewType, TurnOutcome};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct IntroductionRequest {
    pub interview_type: InterviewType,
    #[serde(default)]
    pub settings: InterviewSettings,
}

#[derive(Debug, Serialize)]
pub struct IntroductionResponse {
    pub intro_text: String,
}

#[derive(Debug, Deserialize)]
pub struct TurnRequest {
    pub session_id: Uuid,
    pub answer_text: String,
    pub interview: Interview,
}

#[derive(Debug, Deserialize)]
pub struct ResultRequest {
    pub session_id: Uuid,
    pub interview: Interview,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interviews/introduction
///
/// Returns the opening coach turn for a new session.
pub async fn handle_introduction(
    State(state): State<AppState>,
    Json(request): Json<IntroductionRequest>,
) -> Result<Json<IntroductionResponse>, AppError> {
    let intro_text = state
        .coach
        .introduction(request.interview_type, &request.settings)
        .await?;

    Ok(Json(IntroductionResponse { intro_text }))
}

/// POST /api/v1/interviews/turn
///
/// Rates one answer and returns the next coach turn. `interview` is the history
/// before this answer.
pub async fn handle_turn(
    State(state): State<AppState>,
    Json(request): Json<TurnRequest>,
) -> Result<Json<TurnOutcome>, AppError> {
    let answer_chars = request.answer_text.chars().count();
    if answer_chars > state.config.max_answer_chars {
        return Err(AppError::Validation(format!(
            "answer_text is {answer_chars} characters; the limit is {}",
            state.config.max_answer_chars
        )));
    }

    let outcome = state
        .coach
        .process_turn(&request.answer_text, &request.interview)
        .await?;

    info!(
        "Session {}: question {} rated {}",
        request.session_id,
        request.interview.questions.len() + 1,
        outcome.feedback.rating
    );

    Ok(Json(outcome))
}

/// POST /api/v1/interviews/result
///
/// Builds the end-of-session report.
pub async fn handle_result(
    State(state): State<AppState>,
    Json(request): Json<ResultRequest>,
) -> Result<Json<InterviewResult>, AppError> {
    info!(
        "Session {}: building result over {} questions",
        request.session_id,
        request.interview.questions.len()
    );

    let result = state.coach.build_result(&request.interview).await?;
    Ok(Json(result))
}
