//! Job posting API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{DomainError, JobId, JobPosting};
use crate::infrastructure::job::{CreateJobRequest, UpdateJobRequest};

/// Create/update body; every field optional on the wire
#[derive(Debug, Default, Deserialize)]
pub struct JobBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub salary: Option<String>,
}

impl From<JobBody> for CreateJobRequest {
    fn from(body: JobBody) -> Self {
        Self {
            title: body.title,
            description: body.description,
            company: body.company,
            location: body.location,
            salary: body.salary,
        }
    }
}

impl From<JobBody> for UpdateJobRequest {
    fn from(body: JobBody) -> Self {
        Self {
            title: body.title,
            description: body.description,
            company: body.company,
            location: body.location,
            salary: body.salary,
        }
    }
}

/// Salary is free text, but clients often send a bare number
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(
        Option::<TextOrNumber>::deserialize(deserializer)?.map(|value| match value {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Number(number) => number.to_string(),
        }),
    )
}

/// Job posting as exposed over HTTP
#[derive(Debug, Serialize)]
pub struct JobResponse {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobResponse {
    pub fn from_domain(job: &JobPosting) -> Self {
        Self {
            id: job.id().value(),
            title: job.title().to_string(),
            description: job.description().map(String::from),
            company: job.company().map(String::from),
            location: job.location().map(String::from),
            salary: job.salary().map(String::from),
            created_by: job.created_by().to_string(),
            created_at: job.created_at(),
            updated_at: job.updated_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JobEnvelope {
    pub job: JobResponse,
}

impl JobEnvelope {
    fn new(job: &JobPosting) -> Json<Self> {
        Json(Self {
            job: JobResponse::from_domain(job),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct JobsListResponse {
    pub jobs: Vec<JobResponse>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Ids that are not positive integers cannot name a job
fn parse_job_id(raw: &str) -> Result<JobId, ApiError> {
    raw.parse::<u64>()
        .map(JobId::new)
        .map_err(|_| DomainError::not_found(format!("Job '{}' not found", raw)).into())
}

/// GET /api/jobs
pub async fn list_jobs(
    RequireUser(_): RequireUser,
    State(state): State<AppState>,
) -> Result<Json<JobsListResponse>, ApiError> {
    let jobs: Vec<JobResponse> = state
        .job_service
        .list()
        .await?
        .iter()
        .map(JobResponse::from_domain)
        .collect();

    Ok(Json(JobsListResponse {
        total: jobs.len(),
        jobs,
    }))
}

/// POST /api/jobs
pub async fn create_job(
    RequireUser(identity): RequireUser,
    State(state): State<AppState>,
    Json(body): Json<JobBody>,
) -> Result<(StatusCode, Json<JobEnvelope>), ApiError> {
    let job = state.job_service.create(&identity, body.into()).await?;
    Ok((StatusCode::CREATED, JobEnvelope::new(&job)))
}

/// GET /api/jobs/{id}
pub async fn get_job(
    RequireUser(_): RequireUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobEnvelope>, ApiError> {
    let job = state.job_service.get(parse_job_id(&id)?).await?;
    Ok(JobEnvelope::new(&job))
}

/// PUT /api/jobs/{id}
pub async fn update_job(
    RequireUser(_): RequireUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<JobBody>,
) -> Result<Json<JobEnvelope>, ApiError> {
    let job = state
        .job_service
        .update(parse_job_id(&id)?, body.into())
        .await?;
    Ok(JobEnvelope::new(&job))
}

/// DELETE /api/jobs/{id}
pub async fn delete_job(
    RequireUser(_): RequireUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.job_service.delete(parse_job_id(&id)?).await?;

    Ok(Json(MessageResponse {
        message: "Job deleted successfully".to_string(),
    }))
}
