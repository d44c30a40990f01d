use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::accounts::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::api::schemas::ErrorResponse;
use crate::instructor::application::ports::incoming::use_cases::DeleteInstructorError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete an instructor and all nested records (staff)
#[utoipa::path(
    delete,
    path = "/admin/instructors/{id}",
    tag = "instructors",
    params(("id" = Uuid, Path, description = "Instructor id")),
    responses(
        (status = 204, description = "Instructor deleted"),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
        (status = 404, description = "Instructor not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/admin/instructors/{id}")]
pub async fn delete_instructor_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let instructor_id = path.into_inner();

    match data
        .instructors
        .delete
        .execute(&user.actor(), instructor_id)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(e @ DeleteInstructorError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", &e.to_string())
        }
        Err(e @ DeleteInstructorError::NotFound) => {
            ApiResponse::not_found("INSTRUCTOR_NOT_FOUND", &e.to_string())
        }
        Err(e) => {
            error!(%instructor_id, error = %e, "Failed to delete instructor");
            ApiResponse::internal_error()
        }
    }
}
