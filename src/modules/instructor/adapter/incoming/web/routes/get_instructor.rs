use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::instructor::application::domain::InstructorDetail;
use crate::instructor::application::ports::incoming::use_cases::GetInstructorError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Instructor with skills, educations and experiences
#[utoipa::path(
    get,
    path = "/instructors/{id}",
    tag = "instructors",
    params(("id" = Uuid, Path, description = "Instructor id")),
    responses(
        (status = 200, description = "Instructor detail", body = inline(SuccessResponse<InstructorDetail>)),
        (status = 404, description = "Instructor not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/instructors/{id}")]
pub async fn get_instructor_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let instructor_id = path.into_inner();

    match data.instructors.get.execute(instructor_id).await {
        Ok(detail) => ApiResponse::success(detail),
        Err(e @ GetInstructorError::NotFound) => {
            ApiResponse::not_found("INSTRUCTOR_NOT_FOUND", &e.to_string())
        }
        Err(e) => {
            error!(%instructor_id, error = %e, "Failed to load instructor");
            ApiResponse::internal_error()
        }
    }
}
