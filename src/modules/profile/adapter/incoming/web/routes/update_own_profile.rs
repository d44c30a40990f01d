use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::accounts::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::profile::application::domain::{Gender, ProfileChanges, ProfileView};
use crate::profile::application::ports::incoming::use_cases::UpdateOwnProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct UpdateProfileRequest {
    #[schema(example = "Ada")]
    pub first_name: Option<String>,
    #[schema(example = "Lovelace")]
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub caption: Option<String>,
    #[schema(example = "09123456789")]
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub full_address: Option<String>,
    pub facebook_url: Option<String>,
    #[schema(example = "https://github.com/ada")]
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub website_url: Option<String>,
    pub is_public: bool,
}

impl From<UpdateProfileRequest> for ProfileChanges {
    fn from(req: UpdateProfileRequest) -> Self {
        ProfileChanges {
            first_name: req.first_name,
            last_name: req.last_name,
            avatar: req.avatar,
            caption: req.caption,
            phone: req.phone,
            gender: req.gender,
            full_address: req.full_address,
            facebook_url: req.facebook_url,
            github_url: req.github_url,
            linkedin_url: req.linkedin_url,
            twitter_url: req.twitter_url,
            website_url: req.website_url,
            is_public: req.is_public,
        }
    }
}

/// Replace own profile
///
/// Omitted or blank fields are cleared.
#[utoipa::path(
    put,
    path = "/profile/me",
    tag = "profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile saved", body = inline(SuccessResponse<ProfileView>)),
        (status = 400, description = "Field validation failed", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Account may not edit its profile", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/profile/me")]
pub async fn update_own_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let changes = ProfileChanges::from(req.into_inner());

    match data.profile.update_own.execute(&user.user, changes).await {
        Ok(view) => ApiResponse::success(view),
        Err(UpdateOwnProfileError::Validation(e)) => ApiResponse::field_error(e.field, &e.message),
        Err(e @ UpdateOwnProfileError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", &e.to_string())
        }
        Err(e) => {
            error!(user_id = %user.user.id, error = %e, "Failed to save profile");
            ApiResponse::internal_error()
        }
    }
}
