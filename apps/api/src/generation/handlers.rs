//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::generator::generate_email;
use crate::models::applicant::{ApplicantInput, GenerationConfig};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateEmailResponse {
    pub email: String,
}

/// POST /api/generate-email
///
/// Normalizes the submitted applicant data and returns the generated email.
/// Any generation failure becomes a 500 carrying the failure message.
pub async fn handle_generate_email(
    State(state): State<AppState>,
    Json(request): Json<ApplicantInput>,
) -> Result<Json<GenerateEmailResponse>, AppError> {
    let email = generate_email(&state.llm, request, &GenerationConfig::groq()).await?;

    Ok(Json(GenerateEmailResponse { email }))
}
