use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::profile::application::domain::ProfileView;
use crate::profile::application::ports::incoming::use_cases::GetPublicProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public profile
///
/// Private profiles are reported as not found.
#[utoipa::path(
    get,
    path = "/profiles/{username}",
    tag = "profile",
    params(("username" = String, Path, description = "Account username")),
    responses(
        (status = 200, description = "Public profile", body = inline(SuccessResponse<ProfileView>)),
        (status = 404, description = "No public profile for this username", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/profiles/{username}")]
pub async fn get_public_profile_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();

    match data.profile.get_public.execute(&username).await {
        Ok(view) => ApiResponse::success(view),
        Err(e @ GetPublicProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", &e.to_string())
        }
        Err(e) => {
            error!(%username, error = %e, "Failed to load public profile");
            ApiResponse::internal_error()
        }
    }
}
