use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::accounts::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::instructor_application::application::domain::{
    ApplicationStatus, InstructorApplication,
};
use crate::instructor_application::application::ports::incoming::use_cases::ListApplicationsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListApplicationsQuery {
    /// Only applications in this state
    pub status: Option<ApplicationStatus>,
}

/// List instructor applications (staff)
#[utoipa::path(
    get,
    path = "/admin/instructor-applications/",
    tag = "instructor-applications",
    params(ListApplicationsQuery),
    responses(
        (status = 200, description = "Applications, most recently updated first", body = inline(SuccessResponse<Vec<InstructorApplication>>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/admin/instructor-applications/")]
pub async fn list_applications_handler(
    user: AuthenticatedUser,
    query: web::Query<ListApplicationsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .instructor_applications
        .list
        .execute(&user.actor(), query.status)
        .await
    {
        Ok(applications) => ApiResponse::success(applications),
        Err(e @ ListApplicationsError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", &e.to_string())
        }
        Err(e) => {
            error!(error = %e, "Failed to list instructor applications");
            ApiResponse::internal_error()
        }
    }
}
