use crate::accounts::adapter::incoming::web::extractors::OptionalUser;
use crate::accounts::application::use_cases::resend_activation::{
    ResendActivationError, ResendActivationOutcome,
};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::shared::request_context::RequestContext;
use crate::AppState;
use actix_web::{get, post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use super::forms::{
    FormDescriptor, FormField, Notice, NoticeLevel, ALREADY_LOGGED_IN_MESSAGE,
};

pub const RESENT_MESSAGE: &str = "Please check your email to verify your account.";
pub const ALREADY_ACTIVE_MESSAGE: &str = "Your account is already activated. Please log in.";

#[derive(Deserialize, ToSchema)]
pub struct ResendActivationRequest {
    #[schema(example = "new@x.com")]
    pub email: String,
}

/// Resend-activation form
#[utoipa::path(
    get,
    path = "/verify/resend/",
    tag = "accounts",
    responses(
        (status = 200, description = "Form fields or already-signed-in notice", body = inline(SuccessResponse<FormDescriptor>)),
    )
)]
#[get("/verify/resend/")]
pub async fn resend_activation_form_handler(current: OptionalUser) -> impl Responder {
    if current.is_authenticated() {
        return ApiResponse::success(Notice::new(
            NoticeLevel::Info,
            ALREADY_LOGGED_IN_MESSAGE,
            "/",
        ));
    }

    ApiResponse::success(FormDescriptor::new(
        "resend_activation",
        vec![FormField::new("email", "email", true, Some(255))],
    ))
}

/// Resend the activation email
///
/// Waits for delivery, so a mail failure is reported to the caller.
#[utoipa::path(
    post,
    path = "/verify/resend/",
    tag = "accounts",
    request_body = ResendActivationRequest,
    responses(
        (status = 200, description = "Email sent, or account already active", body = inline(SuccessResponse<Notice>)),
        (
            status = 400,
            description = "Malformed or unknown email",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "field": "email",
                    "message": "Email not exists."
                }
            })
        ),
        (status = 503, description = "Activation email could not be delivered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/verify/resend/")]
pub async fn resend_activation_handler(
    current: OptionalUser,
    req: web::Json<ResendActivationRequest>,
    ctx: RequestContext,
    data: web::Data<AppState>,
) -> impl Responder {
    if current.is_authenticated() {
        return ApiResponse::success(Notice::new(
            NoticeLevel::Info,
            ALREADY_LOGGED_IN_MESSAGE,
            "/",
        ));
    }

    match data
        .accounts
        .resend_activation
        .execute(&req.email, &ctx)
        .await
    {
        Ok(ResendActivationOutcome::Sent) => ApiResponse::success(Notice::new(
            NoticeLevel::Success,
            RESENT_MESSAGE,
            "/sign-in/",
        )),
        Ok(ResendActivationOutcome::AlreadyActive) => ApiResponse::success(Notice::new(
            NoticeLevel::Info,
            ALREADY_ACTIVE_MESSAGE,
            "/sign-in/",
        )),
        Err(ResendActivationError::Validation(e)) => {
            ApiResponse::field_error(e.field, &e.message)
        }
        Err(ResendActivationError::EmailFailed(e)) => {
            warn!(error = %e, "Activation email resend failed");
            ApiResponse::error(
                actix_web::http::StatusCode::SERVICE_UNAVAILABLE,
                "EMAIL_DELIVERY_FAILED",
                "The activation email could not be sent. Please try again later.",
            )
        }
        Err(e) => {
            error!(error = %e, "Resend activation failed");
            ApiResponse::internal_error()
        }
    }
}
