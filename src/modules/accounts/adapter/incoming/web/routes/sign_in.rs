use crate::accounts::adapter::incoming::web::extractors::OptionalUser;
use crate::accounts::application::domain::{User, UserRole};
use crate::accounts::application::use_cases::sign_in::{
    SignInError, SignInRequest, INVALID_CREDENTIALS_MESSAGE,
};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::forms::{
    FormDescriptor, FormField, Notice, NoticeLevel, ALREADY_LOGGED_IN_MESSAGE,
};

pub const SIGNED_IN_MESSAGE: &str = "You're logged in!";

#[derive(Deserialize, ToSchema)]
pub struct SignInRequestDto {
    /// Email address or username
    #[schema(example = "new@x.com")]
    pub login: String,

    #[schema(example = "Abc123@1")]
    pub password: String,

    /// Keep the session for 14 days instead of until the browser closes
    #[serde(default)]
    #[schema(example = false)]
    pub remember: bool,
}

#[derive(Serialize, ToSchema)]
pub struct SignedInUser {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,
    #[schema(example = "new@x.com")]
    email: String,
    #[schema(example = "new-1a2b3c4d")]
    username: Option<String>,
    role: UserRole,
    is_active: bool,
}

impl From<User> for SignedInUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            username: user.username,
            role: user.role,
            is_active: user.is_active,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct SignInResponse {
    #[schema(example = "You're logged in!")]
    message: String,
    #[schema(example = "/")]
    redirect_to: String,
    user: SignedInUser,
}

/// Sign-in form
///
/// Describes the sign-in form, or tells an already signed-in caller so.
#[utoipa::path(
    get,
    path = "/sign-in/",
    tag = "accounts",
    responses(
        (status = 200, description = "Form fields or already-signed-in notice", body = inline(SuccessResponse<FormDescriptor>)),
    )
)]
#[get("/sign-in/")]
pub async fn sign_in_form_handler(current: OptionalUser) -> impl Responder {
    if current.is_authenticated() {
        return ApiResponse::success(Notice::new(
            NoticeLevel::Info,
            ALREADY_LOGGED_IN_MESSAGE,
            "/",
        ));
    }

    ApiResponse::success(FormDescriptor::new(
        "sign_in",
        vec![
            FormField::new("login", "text", true, Some(255)),
            FormField::new("password", "password", true, Some(32)),
            FormField::new("remember", "checkbox", false, None),
        ],
    ))
}

/// Sign in
///
/// Authenticates with email or username and password and sets the session cookie.
/// With `remember` the cookie lives 14 days, otherwise it ends with the browser session.
#[utoipa::path(
    post,
    path = "/sign-in/",
    tag = "accounts",
    request_body = SignInRequestDto,
    responses(
        (status = 200, description = "Signed in; session cookie set", body = inline(SuccessResponse<SignInResponse>)),
        (status = 400, description = "Malformed login or password", body = ErrorResponse),
        (
            status = 401,
            description = "Wrong credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "The username or password is incorrect"
                }
            })
        ),
        (status = 403, description = "Account not activated (only when activation is required)", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/sign-in/")]
pub async fn sign_in_handler(
    req: web::Json<SignInRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match SignInRequest::new(&dto.login, &dto.password, dto.remember) {
        Ok(request) => request,
        Err(e) => return ApiResponse::field_error(e.field, &e.message),
    };

    match data.accounts.sign_in.execute(request).await {
        Ok(output) => {
            info!(user_id = %output.user.id, "Sign-in succeeded");
            let cookie = data
                .session_cookie
                .issue(&output.session_key, output.cookie_max_age);

            ApiResponse::success_with_cookie(
                SignInResponse {
                    message: SIGNED_IN_MESSAGE.to_string(),
                    redirect_to: "/".to_string(),
                    user: output.user.into(),
                },
                cookie,
            )
        }

        Err(SignInError::InvalidCredentials) => {
            warn!("Sign-in failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", INVALID_CREDENTIALS_MESSAGE)
        }

        Err(e @ SignInError::InactiveAccount) => {
            ApiResponse::forbidden("ACCOUNT_INACTIVE", &e.to_string())
        }

        Err(e) => {
            error!(error = %e, "Sign-in failed");
            ApiResponse::internal_error()
        }
    }
}
