//! Job description generation domain

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::error::{require_field, DomainError};

/// Raw generation input as supplied by the caller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescriptionRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub skills: Vec<String>,
}

impl DescriptionRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Normalize the request: the title is required, a blank company is
    /// treated as absent and blank skills are dropped.
    pub fn validate(&self) -> Result<JobBrief, DomainError> {
        let title = require_field("job_title", self.title.as_deref())?;

        let company = self
            .company
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from);

        let skills = self
            .skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Ok(JobBrief {
            title,
            company,
            skills,
        })
    }
}

/// Validated generation input
#[derive(Debug, Clone, PartialEq)]
pub struct JobBrief {
    pub title: String,
    pub company: Option<String>,
    pub skills: Vec<String>,
}

/// Produces job description text from a brief.
///
/// Every implementation reports a missing title as `MissingField` and must
/// not surface transient backend failures to the caller.
#[async_trait]
pub trait DescriptionGenerator: Send + Sync + Debug {
    async fn generate(&self, request: &DescriptionRequest) -> Result<String, DomainError>;

    /// Short name of the backend, used in logs and metrics
    fn name(&self) -> &'static str;
}
