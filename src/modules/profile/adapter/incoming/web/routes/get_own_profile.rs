use actix_web::{get, web, Responder};
use tracing::error;

use crate::accounts::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::profile::application::domain::ProfileView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Own profile
///
/// Returns the caller's profile. Accounts that never saved one get an empty profile.
#[utoipa::path(
    get,
    path = "/profile/me",
    tag = "profile",
    responses(
        (status = 200, description = "Caller's profile", body = inline(SuccessResponse<ProfileView>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/profile/me")]
pub async fn get_own_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.get_own.execute(&user.user).await {
        Ok(view) => ApiResponse::success(view),
        Err(e) => {
            error!(user_id = %user.user.id, error = %e, "Failed to load profile");
            ApiResponse::internal_error()
        }
    }
}
