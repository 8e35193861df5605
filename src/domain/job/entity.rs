//! Job posting entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::user::Email;

/// Sequential job identifier, assigned by the repository starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(u64);

impl JobId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for JobId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated input for a job that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewJobPosting {
    pub title: String,
    pub description: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub created_by: Email,
}

/// Partial overwrite of a job; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
}

impl JobChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.company.is_none()
            && self.location.is_none()
            && self.salary.is_none()
    }
}

/// Job posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    id: JobId,
    title: String,
    description: Option<String>,
    company: Option<String>,
    location: Option<String>,
    salary: Option<String>,
    created_by: Email,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl JobPosting {
    /// Materialize a new posting under the given id
    pub fn create(id: JobId, new: NewJobPosting) -> Self {
        let now = Utc::now();

        Self {
            id,
            title: new.title,
            description: new.description,
            company: new.company,
            location: new.location,
            salary: new.salary,
            created_by: new.created_by,
            created_at: now,
            updated_at: now,
        }
    }

    // Getters

    pub fn id(&self) -> JobId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn salary(&self) -> Option<&str> {
        self.salary.as_deref()
    }

    pub fn created_by(&self) -> &Email {
        &self.created_by
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Overwrite the supplied fields. Id and owner are never touched.
    pub fn apply(&mut self, changes: JobChanges) {
        if changes.is_empty() {
            return;
        }

        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        if let Some(company) = changes.company {
            self.company = Some(company);
        }
        if let Some(location) = changes.location {
            self.location = Some(location);
        }
        if let Some(salary) = changes.salary {
            self.salary = Some(salary);
        }

        self.updated_at = Utc::now();
    }
}
