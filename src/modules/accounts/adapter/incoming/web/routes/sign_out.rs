use crate::accounts::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, post, web, HttpResponse, Responder};
use tracing::{error, info};

use super::forms::{Notice, NoticeLevel};

pub const SIGNED_OUT_MESSAGE: &str = "You're logged out!";

async fn end_session(user: AuthenticatedUser, data: web::Data<AppState>) -> HttpResponse {
    match data.accounts.sign_out.execute(&user.session_key).await {
        Ok(()) => {
            info!(user_id = %user.user.id, "Signed out");
            ApiResponse::success_with_cookie(
                Notice::new(NoticeLevel::Warning, SIGNED_OUT_MESSAGE, "/sign-in/"),
                data.session_cookie.removal(),
            )
        }
        Err(e) => {
            error!(user_id = %user.user.id, error = %e, "Sign-out failed");
            ApiResponse::internal_error()
        }
    }
}

/// Sign out
///
/// Ends the caller's session and clears the session cookie.
#[utoipa::path(
    post,
    path = "/sign-out/",
    tag = "accounts",
    responses(
        (status = 200, description = "Session ended; cookie cleared", body = inline(SuccessResponse<Notice>)),
        (status = 401, description = "No live session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/sign-out/")]
pub async fn sign_out_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    end_session(user, data).await
}

/// Sign out (link)
///
/// Same as `POST /sign-out/`, for plain navigation links.
#[utoipa::path(
    get,
    path = "/sign-out/",
    tag = "accounts",
    responses(
        (status = 200, description = "Session ended; cookie cleared", body = inline(SuccessResponse<Notice>)),
        (status = 401, description = "No live session", body = ErrorResponse),
    )
)]
#[get("/sign-out/")]
pub async fn sign_out_get_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    end_session(user, data).await
}
