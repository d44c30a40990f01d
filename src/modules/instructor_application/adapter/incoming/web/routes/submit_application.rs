use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::instructor_application::application::domain::{ApplicationForm, InstructorApplication};
use crate::instructor_application::application::ports::incoming::use_cases::SubmitApplicationError;
use crate::profile::application::domain::Gender;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitApplicationRequest {
    #[schema(example = "Grace")]
    pub first_name: String,
    #[schema(example = "Hopper")]
    pub last_name: String,
    #[schema(example = "09123456789")]
    pub phone: String,
    pub gender: Gender,
    #[schema(example = "grace@x.com")]
    pub email: String,
    pub address: String,
    /// Reference returned by the document upload
    #[schema(example = "apply_teacher/grace.pdf")]
    pub resume: String,
}

impl From<SubmitApplicationRequest> for ApplicationForm {
    fn from(req: SubmitApplicationRequest) -> Self {
        ApplicationForm {
            first_name: req.first_name,
            last_name: req.last_name,
            phone: req.phone,
            gender: req.gender,
            email: req.email,
            address: req.address,
            resume: req.resume,
        }
    }
}

/// Apply to teach
#[utoipa::path(
    post,
    path = "/instructor-applications/",
    tag = "instructor-applications",
    request_body = SubmitApplicationRequest,
    responses(
        (status = 201, description = "Application received and pending review", body = inline(SuccessResponse<InstructorApplication>)),
        (status = 400, description = "Field validation failed or phone/email already used", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/instructor-applications/")]
pub async fn submit_application_handler(
    req: web::Json<SubmitApplicationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .instructor_applications
        .submit
        .execute(req.into_inner().into())
        .await
    {
        Ok(application) => ApiResponse::created(application),
        Err(SubmitApplicationError::Validation(e)) => ApiResponse::field_error(e.field, &e.message),
        Err(e) => {
            error!(error = %e, "Failed to store instructor application");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructor_application::application::ports::incoming::use_cases::SubmitApplicationUseCase;
    use crate::shared::validation::FieldError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::pending_application;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockSubmit {
        result: Result<InstructorApplication, SubmitApplicationError>,
    }

    #[async_trait]
    impl SubmitApplicationUseCase for MockSubmit {
        async fn execute(
            &self,
            _form: ApplicationForm,
        ) -> Result<InstructorApplication, SubmitApplicationError> {
            self.result.clone()
        }
    }

    fn payload() -> serde_json::Value {
        serde_json::json!({
            "first_name": "Grace",
            "last_name": "Hopper",
            "phone": "09123456789",
            "gender": "F",
            "email": "grace@x.com",
            "address": "1 Navy Yard",
            "resume": "apply_teacher/grace.pdf"
        })
    }

    #[actix_web::test]
    async fn test_submit_is_public_and_created() {
        let state = TestAppStateBuilder::default()
            .with_submit_application(MockSubmit {
                result: Ok(pending_application()),
            })
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(submit_application_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/instructor-applications/")
            .set_json(payload())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 201);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "pending");
        assert_eq!(body["data"]["gender"], "F");
    }

    #[actix_web::test]
    async fn test_duplicate_phone_is_field_error() {
        let state = TestAppStateBuilder::default()
            .with_submit_application(MockSubmit {
                result: Err(SubmitApplicationError::Validation(FieldError::new(
                    "phone",
                    "Instructor application with this phone already exists.",
                ))),
            })
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(submit_application_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/instructor-applications/")
            .set_json(payload())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["field"], "phone");
    }

    #[actix_web::test]
    async fn test_unknown_gender_is_rejected_by_json_config() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(crate::shared::api::custom_json_config())
                .service(submit_application_handler),
        )
        .await;

        let mut body = payload();
        body["gender"] = serde_json::json!("X");
        let req = test::TestRequest::post()
            .uri("/instructor-applications/")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
    }
}
