use crate::accounts::adapter::incoming::web::extractors::OptionalUser;
use crate::accounts::application::use_cases::activate_account::{
    ActivateAccountError, ACTIVATION_SUCCESS_MESSAGE,
};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::{error, info};

use super::forms::{Notice, NoticeLevel};

pub const ACTIVATION_WHILE_SIGNED_IN_MESSAGE: &str = "You are already logged in.";

/// Activate an account
///
/// Follows the link from the activation email. Every kind of bad link gets the same answer.
#[utoipa::path(
    get,
    path = "/verify/activate/{uidb64}/{token}/",
    tag = "accounts",
    params(
        ("uidb64" = String, Path, description = "URL-safe base64 of the user id"),
        ("token" = String, Path, description = "Activation token from the email"),
    ),
    responses(
        (status = 200, description = "Account activated", body = inline(SuccessResponse<Notice>)),
        (
            status = 400,
            description = "Invalid, expired or already-used link",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_ACTIVATION_LINK",
                    "message": "Invalid activation link."
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/verify/activate/{uidb64}/{token}/")]
pub async fn activate_account_handler(
    current: OptionalUser,
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    if current.is_authenticated() {
        return ApiResponse::success(Notice::new(
            NoticeLevel::Info,
            ACTIVATION_WHILE_SIGNED_IN_MESSAGE,
            "/",
        ));
    }

    let (uidb64, token) = path.into_inner();

    match data.accounts.activate.execute(&uidb64, &token).await {
        Ok(user) => {
            info!(user_id = %user.id, "Account activated");
            ApiResponse::success(Notice::new(
                NoticeLevel::Success,
                ACTIVATION_SUCCESS_MESSAGE,
                "/sign-in/",
            ))
        }
        Err(e @ ActivateAccountError::InvalidLink) => {
            ApiResponse::bad_request("INVALID_ACTIVATION_LINK", &e.to_string())
        }
        Err(e) => {
            error!(error = %e, "Activation failed");
            ApiResponse::internal_error()
        }
    }
}
