use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::accounts::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::instructor_application::application::domain::{InstructorApplication, ReviewDecision};
use crate::instructor_application::application::ports::incoming::use_cases::ReviewApplicationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReviewApplicationRequest {
    pub decision: ReviewDecision,
}

/// Approve or reject an application (staff)
///
/// Only pending applications can be reviewed.
#[utoipa::path(
    post,
    path = "/admin/instructor-applications/{id}/review",
    tag = "instructor-applications",
    params(("id" = Uuid, Path, description = "Application id")),
    request_body = ReviewApplicationRequest,
    responses(
        (status = 200, description = "Application reviewed", body = inline(SuccessResponse<InstructorApplication>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
        (status = 404, description = "Application not found", body = ErrorResponse),
        (status = 409, description = "Application already approved or rejected", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/admin/instructor-applications/{id}/review")]
pub async fn review_application_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<ReviewApplicationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let application_id = path.into_inner();

    match data
        .instructor_applications
        .review
        .execute(&user.actor(), application_id, req.decision)
        .await
    {
        Ok(application) => ApiResponse::success(application),
        Err(e @ ReviewApplicationError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", &e.to_string())
        }
        Err(e @ ReviewApplicationError::NotFound) => {
            ApiResponse::not_found("APPLICATION_NOT_FOUND", &e.to_string())
        }
        Err(e @ ReviewApplicationError::NotPending(_)) => {
            ApiResponse::conflict("APPLICATION_ALREADY_REVIEWED", &e.to_string())
        }
        Err(e) => {
            error!(%application_id, error = %e, "Failed to review instructor application");
            ApiResponse::internal_error()
        }
    }
}
