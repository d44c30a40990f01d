use crate::accounts::adapter::incoming::web::extractors::OptionalUser;
use crate::accounts::application::orchestrator::user_registration::{
    UserRegistrationError, UserRegistrationOutput,
};
use crate::accounts::application::use_cases::create_user::{CreateUserError, RegisterUserInput};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::shared::request_context::RequestContext;
use crate::AppState;
use actix_web::{get, post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use super::forms::{
    FormDescriptor, FormField, Notice, NoticeLevel, ALREADY_LOGGED_IN_MESSAGE,
};

#[derive(Deserialize, ToSchema)]
pub struct SignUpRequest {
    #[schema(example = "new@x.com")]
    pub email: String,
    #[schema(example = "Abc123@1")]
    pub password1: String,
    /// Must repeat `password1`
    #[schema(example = "Abc123@1")]
    pub password2: String,
    #[serde(default)]
    #[schema(example = true)]
    pub terms_agreed: bool,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredUser {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,
    #[schema(example = "new@x.com")]
    email: String,
    #[schema(example = "new-1a2b3c4d")]
    username: String,
    #[schema(example = "Your account has been created. Please check your email to verify your account.")]
    message: String,
    #[schema(example = "/sign-in/")]
    redirect_to: String,
}

impl From<UserRegistrationOutput> for RegisteredUser {
    fn from(output: UserRegistrationOutput) -> Self {
        Self {
            id: output.user_id.to_string(),
            email: output.email,
            username: output.username,
            message: output.message,
            redirect_to: "/sign-in/".to_string(),
        }
    }
}

/// Sign-up form
#[utoipa::path(
    get,
    path = "/sign-up/",
    tag = "accounts",
    responses(
        (status = 200, description = "Form fields or already-signed-in notice", body = inline(SuccessResponse<FormDescriptor>)),
    )
)]
#[get("/sign-up/")]
pub async fn sign_up_form_handler(current: OptionalUser) -> impl Responder {
    if current.is_authenticated() {
        return ApiResponse::success(Notice::new(
            NoticeLevel::Info,
            ALREADY_LOGGED_IN_MESSAGE,
            "/",
        ));
    }

    ApiResponse::success(FormDescriptor::new(
        "sign_up",
        vec![
            FormField::new("email", "email", true, Some(255)),
            FormField::new("password1", "password", true, Some(32)),
            FormField::new("password2", "password", true, Some(32)),
            FormField::new("terms_agreed", "checkbox", true, None),
        ],
    ))
}

/// Register a new account
///
/// Creates an inactive student account with a generated username.
/// The activation email is sent in the background; the response does not wait for it.
#[utoipa::path(
    post,
    path = "/sign-up/",
    tag = "accounts",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<RegisteredUser>)),
        (
            status = 400,
            description = "Field validation failed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "field": "email",
                    "message": "Email already exists."
                }
            })
        ),
        (status = 409, description = "Email registered concurrently", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/sign-up/")]
pub async fn sign_up_handler(
    current: OptionalUser,
    req: web::Json<SignUpRequest>,
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

    let dto = req.into_inner();
    let input = RegisterUserInput {
        email: dto.email,
        password1: dto.password1,
        password2: dto.password2,
        terms_agreed: dto.terms_agreed,
    };

    match data.accounts.register.register_user(input, ctx).await {
        Ok(output) => {
            info!(user_id = %output.user_id, "Account registered");
            ApiResponse::created(RegisteredUser::from(output))
        }

        Err(UserRegistrationError::CreateUserFailed(e)) => match e {
            CreateUserError::Validation(field_error) => {
                ApiResponse::field_error(field_error.field, &field_error.message)
            }
            CreateUserError::EmailAlreadyExists => {
                ApiResponse::field_error("email", &e.to_string())
            }
            CreateUserError::Conflict => ApiResponse::conflict("EMAIL_CONFLICT", &e.to_string()),
            CreateUserError::HashingFailed(_) | CreateUserError::RepositoryError(_) => {
                error!(error = %e, "Registration failed");
                ApiResponse::internal_error()
            }
        },
    }
}
