use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::profile::application::domain::Gender;
use crate::shared::validation::{normalize_email, required_text, validate_phone, FieldError};

const NAME_MAX_LENGTH: usize = 100;
const ADDRESS_MAX_LENGTH: usize = 2_000;
const RESUME_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    pub fn target_status(&self) -> ApplicationStatus {
        match self {
            ReviewDecision::Approve => ApplicationStatus::Approved,
            ReviewDecision::Reject => ApplicationStatus::Rejected,
        }
    }
}

/// A request to teach, submitted before the applicant has an instructor record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct InstructorApplication {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: Uuid,
    #[schema(example = "Grace")]
    pub first_name: String,
    #[schema(example = "Hopper")]
    pub last_name: String,
    #[schema(example = "09123456789")]
    pub phone: String,
    pub gender: Gender,
    #[schema(example = "grace@x.com")]
    pub email: String,
    pub address: String,
    /// Stored reference to the uploaded resume
    #[schema(example = "apply_teacher/grace.pdf")]
    pub resume: String,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InstructorApplication {
    /// Only pending applications can be decided; approved and rejected are final.
    pub fn can_transition_to(
        &self,
        decision: ReviewDecision,
    ) -> Result<ApplicationStatus, ApplicationStatus> {
        match self.status {
            ApplicationStatus::Pending => Ok(decision.target_status()),
            other => Err(other),
        }
    }
}

impl fmt::Display for InstructorApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.first_name, self.last_name, self.status)
    }
}

/// Raw submission as received from the public form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub gender: Gender,
    pub email: String,
    pub address: String,
    pub resume: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInstructorApplication {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub gender: Gender,
    pub email: String,
    pub address: String,
    pub resume: String,
}

impl ApplicationForm {
    pub fn validate(self) -> Result<NewInstructorApplication, FieldError> {
        Ok(NewInstructorApplication {
            first_name: required_text("first_name", &self.first_name, NAME_MAX_LENGTH)?,
            last_name: required_text("last_name", &self.last_name, NAME_MAX_LENGTH)?,
            phone: validate_phone("phone", &self.phone)?,
            gender: self.gender,
            email: normalize_email("email", &self.email)?,
            address: required_text("address", &self.address, ADDRESS_MAX_LENGTH)?,
            resume: required_text("resume", &self.resume, RESUME_MAX_LENGTH)?,
        })
    }
}
