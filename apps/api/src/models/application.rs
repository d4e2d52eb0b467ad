use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::scoring::ScoreResult;

pub const DEFAULT_STATUS: &str = "Wishlist";

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

/// A tracked job posting, as stored in `job_applications`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct JobApplication {
    pub id: i64,
    pub company: String,
    pub role: String,
    pub location: Option<String>,
    pub job_url: Option<String>,
    pub status: String,
    pub deadline: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create payload. `status` defaults to "Wishlist".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewApplication {
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub job_url: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update. Only supplied fields are applied; nothing can be cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationUpdate {
    pub company: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
    pub job_url: Option<String>,
    pub status: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl ApplicationUpdate {
    pub fn apply_to(self, app: &mut JobApplication) {
        if let Some(company) = self.company {
            app.company = company;
        }
        if let Some(role) = self.role {
            app.role = role;
        }
        if let Some(location) = self.location {
            app.location = Some(location);
        }
        if let Some(job_url) = self.job_url {
            app.job_url = Some(job_url);
        }
        if let Some(status) = self.status {
            app.status = status;
        }
        if let Some(deadline) = self.deadline {
            app.deadline = Some(deadline);
        }
        if let Some(notes) = self.notes {
            app.notes = Some(notes);
        }
    }
}

/// An application with its freshly computed score, flattened for responses.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredApplication {
    #[serde(flatten)]
    pub application: JobApplication,
    #[serde(flatten)]
    pub score: ScoreResult,
}
