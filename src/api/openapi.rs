use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

use crate::accounts::adapter::incoming::web::session_cookie::SESSION_COOKIE_NAME;
use crate::accounts::adapter::incoming::web::routes::{
    FormDescriptor, FormField, Notice, NoticeLevel, RegisteredUser, ResendActivationRequest,
    SignInRequestDto, SignInResponse, SignUpRequest, SignedInUser,
};
use crate::accounts::application::domain::UserRole;
use crate::instructor::application::domain::{
    Degree, Education, EducationForm, Experience, ExperienceForm, ExperienceLevel, Instructor,
    InstructorDetail, InstructorForm, Skill, SkillForm, SkillLevel,
};
use crate::instructor_application::adapter::incoming::web::routes::{
    ReviewApplicationRequest, SubmitApplicationRequest,
};
use crate::instructor_application::application::domain::{
    ApplicationStatus, InstructorApplication, ReviewDecision,
};
use crate::profile::adapter::incoming::web::routes::UpdateProfileRequest;
use crate::profile::application::domain::{Gender, Profile, ProfileView};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Eduport API",
        version = "1.0.0",
        description = "Accounts, profiles and instructor management for the Eduport e-learning platform",
        contact(
            name = "API Support",
            email = "support@eduport.com"
        )
    ),
    paths(
        // Account endpoints
        crate::accounts::adapter::incoming::web::routes::sign_up_form_handler,
        crate::accounts::adapter::incoming::web::routes::sign_up_handler,
        crate::accounts::adapter::incoming::web::routes::sign_in_form_handler,
        crate::accounts::adapter::incoming::web::routes::sign_in_handler,
        crate::accounts::adapter::incoming::web::routes::sign_out_get_handler,
        crate::accounts::adapter::incoming::web::routes::sign_out_handler,
        crate::accounts::adapter::incoming::web::routes::activate_account_handler,
        crate::accounts::adapter::incoming::web::routes::resend_activation_form_handler,
        crate::accounts::adapter::incoming::web::routes::resend_activation_handler,

        // Profile endpoints
        crate::profile::adapter::incoming::web::routes::get_own_profile_handler,
        crate::profile::adapter::incoming::web::routes::update_own_profile_handler,
        crate::profile::adapter::incoming::web::routes::get_public_profile_handler,

        // Instructor application endpoints
        crate::instructor_application::adapter::incoming::web::routes::submit_application_handler,
        crate::instructor_application::adapter::incoming::web::routes::list_applications_handler,
        crate::instructor_application::adapter::incoming::web::routes::review_application_handler,

        // Instructor endpoints
        crate::instructor::adapter::incoming::web::routes::create_instructor_handler,
        crate::instructor::adapter::incoming::web::routes::get_instructor_handler,
        crate::instructor::adapter::incoming::web::routes::delete_instructor_handler,
        crate::instructor::adapter::incoming::web::routes::add_skill_handler,
        crate::instructor::adapter::incoming::web::routes::add_education_handler,
        crate::instructor::adapter::incoming::web::routes::add_experience_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Account DTOs
            SignUpRequest,
            RegisteredUser,
            SignInRequestDto,
            SignInResponse,
            SignedInUser,
            ResendActivationRequest,
            FormDescriptor,
            FormField,
            Notice,
            NoticeLevel,
            UserRole,

            // Profile DTOs
            UpdateProfileRequest,
            Profile,
            ProfileView,
            Gender,

            // Instructor application DTOs
            SubmitApplicationRequest,
            ReviewApplicationRequest,
            InstructorApplication,
            ApplicationStatus,
            ReviewDecision,

            // Instructor DTOs
            InstructorForm,
            Instructor,
            InstructorDetail,
            SkillForm,
            Skill,
            SkillLevel,
            EducationForm,
            Education,
            Degree,
            ExperienceForm,
            Experience,
            ExperienceLevel
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "accounts", description = "Registration, activation and session endpoints"),
        (name = "profile", description = "Profile endpoints"),
        (name = "instructor-applications", description = "Instructor application workflow"),
        (name = "instructors", description = "Instructor management endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "SessionCookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    SESSION_COOKIE_NAME,
                    "Session key issued by POST /sign-in/",
                ))),
            )
        }
    }
}
