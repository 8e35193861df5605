//! Description generation endpoint

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::DescriptionRequest;

#[derive(Debug, Default, Deserialize)]
pub struct GenerateDescriptionBody {
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    /// Absent and `null` both mean no skills
    pub key_skills: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct GenerateDescriptionResponse {
    pub description: String,
}

/// POST /api/ai/generate-description
pub async fn generate_description(
    RequireUser(identity): RequireUser,
    State(state): State<AppState>,
    Json(body): Json<GenerateDescriptionBody>,
) -> Result<Json<GenerateDescriptionResponse>, ApiError> {
    let request = DescriptionRequest {
        title: body.job_title,
        company: body.company_name,
        skills: body.key_skills.unwrap_or_default(),
    };

    tracing::debug!(
        caller = %identity,
        generator = state.description_generator.name(),
        "Generating job description"
    );

    let description = state.description_generator.generate(&request).await?;

    Ok(Json(GenerateDescriptionResponse { description }))
}
