use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::accounts::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::instructor::application::domain::{
    Education, EducationForm, Experience, ExperienceForm, Skill, SkillForm,
};
use crate::instructor::application::ports::incoming::use_cases::AddRecordError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn record_error(e: AddRecordError, instructor_id: Uuid, record: &str) -> HttpResponse {
    match e {
        AddRecordError::Validation(e) => ApiResponse::field_error(e.field, &e.message),
        e @ AddRecordError::Forbidden => ApiResponse::forbidden("FORBIDDEN", &e.to_string()),
        e @ AddRecordError::InstructorNotFound => {
            ApiResponse::not_found("INSTRUCTOR_NOT_FOUND", &e.to_string())
        }
        e => {
            error!(%instructor_id, record, error = %e, "Failed to add instructor record");
            ApiResponse::internal_error()
        }
    }
}

/// Add a skill to an instructor (staff)
#[utoipa::path(
    post,
    path = "/admin/instructors/{id}/skills",
    tag = "instructors",
    params(("id" = Uuid, Path, description = "Instructor id")),
    request_body = SkillForm,
    responses(
        (status = 201, description = "Skill added", body = inline(SuccessResponse<Skill>)),
        (status = 400, description = "Field validation failed", body = ErrorResponse),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
        (status = 404, description = "Instructor not found", body = ErrorResponse),
    )
)]
#[post("/admin/instructors/{id}/skills")]
pub async fn add_skill_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<SkillForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let instructor_id = path.into_inner();

    match data
        .instructors
        .add_skill
        .execute(&user.actor(), instructor_id, req.into_inner())
        .await
    {
        Ok(skill) => ApiResponse::created(skill),
        Err(e) => record_error(e, instructor_id, "skill"),
    }
}

/// Add an education to an instructor (staff)
#[utoipa::path(
    post,
    path = "/admin/instructors/{id}/educations",
    tag = "instructors",
    params(("id" = Uuid, Path, description = "Instructor id")),
    request_body = EducationForm,
    responses(
        (status = 201, description = "Education added", body = inline(SuccessResponse<Education>)),
        (status = 400, description = "Field validation failed", body = ErrorResponse),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
        (status = 404, description = "Instructor not found", body = ErrorResponse),
    )
)]
#[post("/admin/instructors/{id}/educations")]
pub async fn add_education_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<EducationForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let instructor_id = path.into_inner();

    match data
        .instructors
        .add_education
        .execute(&user.actor(), instructor_id, req.into_inner())
        .await
    {
        Ok(education) => ApiResponse::created(education),
        Err(e) => record_error(e, instructor_id, "education"),
    }
}

/// Add a work experience to an instructor (staff)
#[utoipa::path(
    post,
    path = "/admin/instructors/{id}/experiences",
    tag = "instructors",
    params(("id" = Uuid, Path, description = "Instructor id")),
    request_body = ExperienceForm,
    responses(
        (status = 201, description = "Experience added", body = inline(SuccessResponse<Experience>)),
        (status = 400, description = "Field validation failed", body = ErrorResponse),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
        (status = 404, description = "Instructor not found", body = ErrorResponse),
    )
)]
#[post("/admin/instructors/{id}/experiences")]
pub async fn add_experience_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<ExperienceForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let instructor_id = path.into_inner();

    match data
        .instructors
        .add_experience
        .execute(&user.actor(), instructor_id, req.into_inner())
        .await
    {
        Ok(experience) => ApiResponse::created(experience),
        Err(e) => record_error(e, instructor_id, "experience"),
    }
}
