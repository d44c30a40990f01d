use actix_web::{post, web, Responder};
use tracing::error;

use crate::accounts::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::instructor::application::domain::{Instructor, InstructorForm};
use crate::instructor::application::ports::incoming::use_cases::CreateInstructorError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Make an existing user an instructor (staff)
#[utoipa::path(
    post,
    path = "/admin/instructors/",
    tag = "instructors",
    request_body = InstructorForm,
    responses(
        (status = 201, description = "Instructor created and user promoted", body = inline(SuccessResponse<Instructor>)),
        (status = 400, description = "Field validation failed", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "User is already an instructor", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/admin/instructors/")]
pub async fn create_instructor_handler(
    user: AuthenticatedUser,
    req: web::Json<InstructorForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .instructors
        .create
        .execute(&user.actor(), req.into_inner())
        .await
    {
        Ok(instructor) => ApiResponse::created(instructor),
        Err(CreateInstructorError::Validation(e)) => ApiResponse::field_error(e.field, &e.message),
        Err(e @ CreateInstructorError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", &e.to_string())
        }
        Err(e @ CreateInstructorError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", &e.to_string())
        }
        Err(e @ CreateInstructorError::AlreadyInstructor) => {
            ApiResponse::conflict("ALREADY_INSTRUCTOR", &e.to_string())
        }
        Err(e) => {
            error!(error = %e, "Failed to create instructor");
            ApiResponse::internal_error()
        }
    }
}
