use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::{required_text, FieldError};

const JOB_TITLE_MAX_LENGTH: usize = 100;
const RECORD_TEXT_MAX_LENGTH: usize = 255;
const RESUME_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SkillLevel {
    Basic,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Degree {
    Bachelor,
    Master,
    Doctorate,
    Professional,
    Diploma,
    Other,
}

impl Degree {
    pub fn label(&self) -> &'static str {
        match self {
            Degree::Bachelor => "Bachelor's Degree",
            Degree::Master => "Master's Degree",
            Degree::Doctorate => "Doctorate Degree",
            Degree::Professional => "Professional Degree",
            Degree::Diploma => "Diploma/Certificate",
            Degree::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExperienceLevel {
    Intern,
    Junior,
    Mid,
    Senior,
}

/// Teaching profile of an approved user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Instructor {
    pub id: Uuid,
    pub user_id: Uuid,
    #[schema(example = "Backend Engineer")]
    pub job_title: String,
    pub job_start_date: NaiveDate,
    pub job_end_date: Option<NaiveDate>,
    pub experience_year: u16,
    pub birthdate: NaiveDate,
    /// Whether the instructor currently teaches.
    pub status: bool,
    #[schema(example = "instructor_resume/ada.pdf")]
    pub resume: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Skill {
    pub id: Uuid,
    pub instructor_id: Uuid,
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Education {
    pub id: Uuid,
    pub instructor_id: Uuid,
    pub major: String,
    pub degree: Degree,
    pub institution: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Experience {
    pub id: Uuid,
    pub instructor_id: Uuid,
    pub job_title: String,
    pub company: String,
    pub level: ExperienceLevel,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

/// An instructor with everything nested under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct InstructorDetail {
    #[schema(example = "Teacher: ada - Backend Engineer")]
    pub title: String,
    pub username: String,
    pub instructor: Instructor,
    pub skills: Vec<Skill>,
    pub educations: Vec<Education>,
    pub experiences: Vec<Experience>,
}

impl InstructorDetail {
    pub fn new(
        username: &str,
        instructor: Instructor,
        skills: Vec<Skill>,
        educations: Vec<Education>,
        experiences: Vec<Experience>,
    ) -> Self {
        Self {
            title: format!("Teacher: {} - {}", username, instructor.job_title),
            username: username.to_string(),
            instructor,
            skills,
            educations,
            experiences,
        }
    }
}

impl fmt::Display for InstructorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

fn check_range(
    field: &'static str,
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> Result<(), FieldError> {
    match end {
        Some(end) if end < start => Err(FieldError::new(
            field,
            "End date must be on or after the start date.",
        )),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct InstructorForm {
    pub user_id: Uuid,
    pub job_title: String,
    pub job_start_date: NaiveDate,
    #[serde(default)]
    pub job_end_date: Option<NaiveDate>,
    pub experience_year: u16,
    pub birthdate: NaiveDate,
    #[serde(default)]
    pub status: bool,
    pub resume: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInstructor {
    pub user_id: Uuid,
    pub job_title: String,
    pub job_start_date: NaiveDate,
    pub job_end_date: Option<NaiveDate>,
    pub experience_year: u16,
    pub birthdate: NaiveDate,
    pub status: bool,
    pub resume: String,
}

impl InstructorForm {
    pub fn validate(self) -> Result<NewInstructor, FieldError> {
        let job_title = required_text("job_title", &self.job_title, JOB_TITLE_MAX_LENGTH)?;
        check_range("job_end_date", self.job_start_date, self.job_end_date)?;

        Ok(NewInstructor {
            user_id: self.user_id,
            job_title,
            job_start_date: self.job_start_date,
            job_end_date: self.job_end_date,
            experience_year: self.experience_year,
            birthdate: self.birthdate,
            status: self.status,
            resume: required_text("resume", &self.resume, RESUME_MAX_LENGTH)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct SkillForm {
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSkill {
    pub name: String,
    pub level: SkillLevel,
}

impl SkillForm {
    pub fn validate(self) -> Result<NewSkill, FieldError> {
        Ok(NewSkill {
            name: required_text("name", &self.name, RECORD_TEXT_MAX_LENGTH)?,
            level: self.level,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct EducationForm {
    pub major: String,
    pub degree: Degree,
    pub institution: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEducation {
    pub major: String,
    pub degree: Degree,
    pub institution: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl EducationForm {
    pub fn validate(self) -> Result<NewEducation, FieldError> {
        let major = required_text("major", &self.major, RECORD_TEXT_MAX_LENGTH)?;
        let institution = required_text("institution", &self.institution, RECORD_TEXT_MAX_LENGTH)?;
        check_range("end_date", self.start_date, self.end_date)?;

        Ok(NewEducation {
            major,
            degree: self.degree,
            institution,
            start_date: self.start_date,
            end_date: self.end_date,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct ExperienceForm {
    pub job_title: String,
    pub company: String,
    pub level: ExperienceLevel,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExperience {
    pub job_title: String,
    pub company: String,
    pub level: ExperienceLevel,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl ExperienceForm {
    pub fn validate(self) -> Result<NewExperience, FieldError> {
        let job_title = required_text("job_title", &self.job_title, RECORD_TEXT_MAX_LENGTH)?;
        let company = required_text("company", &self.company, RECORD_TEXT_MAX_LENGTH)?;
        check_range("end_date", self.start_date, self.end_date)?;

        Ok(NewExperience {
            job_title,
            company,
            level: self.level,
            start_date: self.start_date,
            end_date: self.end_date,
        })
    }
}
