use async_trait::async_trait;
use uuid::Uuid;

use crate::accounts::application::domain::{Actor, User};
use crate::accounts::application::use_cases::{
    activate_account::{ActivateAccountError, IActivateAccountUseCase},
    create_user::{CreateUserError, ICreateUserUseCase, RegisterUserInput},
    resend_activation::{IResendActivationUseCase, ResendActivationError, ResendActivationOutcome},
    sign_in::{ISignInUseCase, SignInError, SignInOutput, SignInRequest},
    sign_out::{ISignOutUseCase, SignOutError},
};
use crate::email::application::ports::outgoing::{AccountEmailError, AccountEmailNotifier};
use crate::instructor::application::domain::{
    Education, EducationForm, Experience, ExperienceForm, Instructor, InstructorDetail,
    InstructorForm, Skill, SkillForm,
};
use crate::instructor::application::ports::incoming::use_cases::{
    AddEducationUseCase, AddExperienceUseCase, AddRecordError, AddSkillUseCase,
    CreateInstructorError, CreateInstructorUseCase, DeleteInstructorError,
    DeleteInstructorUseCase, GetInstructorError, GetInstructorUseCase,
};
use crate::instructor_application::application::domain::{
    ApplicationForm, ApplicationStatus, InstructorApplication, ReviewDecision,
};
use crate::instructor_application::application::ports::incoming::use_cases::{
    ListApplicationsError, ListApplicationsUseCase, ReviewApplicationError,
    ReviewApplicationUseCase, SubmitApplicationError, SubmitApplicationUseCase,
};
use crate::profile::application::domain::{ProfileChanges, ProfileView};
use crate::profile::application::ports::incoming::use_cases::{
    GetOwnProfileError, GetOwnProfileUseCase, GetPublicProfileError, GetPublicProfileUseCase,
    UpdateOwnProfileError, UpdateOwnProfileUseCase,
};
use crate::shared::request_context::RequestContext;

// Accounts

#[derive(Default, Clone)]
pub struct StubCreateUserUseCase;

#[async_trait]
impl ICreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _input: RegisterUserInput) -> Result<User, CreateUserError> {
        unimplemented!("Not used in this test")
    }
}

/// Accepts every activation email without sending anything.
#[derive(Default, Clone)]
pub struct StubAccountEmailNotifier;

#[async_trait]
impl AccountEmailNotifier for StubAccountEmailNotifier {
    async fn send_activation_email(
        &self,
        _user: &User,
        _ctx: &RequestContext,
    ) -> Result<(), AccountEmailError> {
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct StubSignInUseCase;

#[async_trait]
impl ISignInUseCase for StubSignInUseCase {
    async fn execute(&self, _request: SignInRequest) -> Result<SignInOutput, SignInError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSignOutUseCase;

#[async_trait]
impl ISignOutUseCase for StubSignOutUseCase {
    async fn execute(&self, _session_key: &str) -> Result<(), SignOutError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubActivateAccountUseCase;

#[async_trait]
impl IActivateAccountUseCase for StubActivateAccountUseCase {
    async fn execute(&self, _uidb64: &str, _token: &str) -> Result<User, ActivateAccountError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubResendActivationUseCase;

#[async_trait]
impl IResendActivationUseCase for StubResendActivationUseCase {
    async fn execute(
        &self,
        _email: &str,
        _ctx: &RequestContext,
    ) -> Result<ResendActivationOutcome, ResendActivationError> {
        unimplemented!("Not used in this test")
    }
}

// Profile

#[derive(Default, Clone)]
pub struct StubGetOwnProfileUseCase;

#[async_trait]
impl GetOwnProfileUseCase for StubGetOwnProfileUseCase {
    async fn execute(&self, _user: &User) -> Result<ProfileView, GetOwnProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateOwnProfileUseCase;

#[async_trait]
impl UpdateOwnProfileUseCase for StubUpdateOwnProfileUseCase {
    async fn execute(
        &self,
        _user: &User,
        _changes: ProfileChanges,
    ) -> Result<ProfileView, UpdateOwnProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetPublicProfileUseCase;

#[async_trait]
impl GetPublicProfileUseCase for StubGetPublicProfileUseCase {
    async fn execute(&self, _username: &str) -> Result<ProfileView, GetPublicProfileError> {
        Err(GetPublicProfileError::NotFound)
    }
}

// Instructor applications

#[derive(Default, Clone)]
pub struct StubSubmitApplicationUseCase;

#[async_trait]
impl SubmitApplicationUseCase for StubSubmitApplicationUseCase {
    async fn execute(
        &self,
        _form: ApplicationForm,
    ) -> Result<InstructorApplication, SubmitApplicationError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListApplicationsUseCase;

#[async_trait]
impl ListApplicationsUseCase for StubListApplicationsUseCase {
    async fn execute(
        &self,
        _actor: &Actor,
        _status: Option<ApplicationStatus>,
    ) -> Result<Vec<InstructorApplication>, ListApplicationsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubReviewApplicationUseCase;

#[async_trait]
impl ReviewApplicationUseCase for StubReviewApplicationUseCase {
    async fn execute(
        &self,
        _actor: &Actor,
        _application_id: Uuid,
        _decision: ReviewDecision,
    ) -> Result<InstructorApplication, ReviewApplicationError> {
        Err(ReviewApplicationError::NotFound)
    }
}

// Instructors

#[derive(Default, Clone)]
pub struct StubCreateInstructorUseCase;

#[async_trait]
impl CreateInstructorUseCase for StubCreateInstructorUseCase {
    async fn execute(
        &self,
        _actor: &Actor,
        _form: InstructorForm,
    ) -> Result<Instructor, CreateInstructorError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetInstructorUseCase;

#[async_trait]
impl GetInstructorUseCase for StubGetInstructorUseCase {
    async fn execute(&self, _instructor_id: Uuid) -> Result<InstructorDetail, GetInstructorError> {
        Err(GetInstructorError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteInstructorUseCase;

#[async_trait]
impl DeleteInstructorUseCase for StubDeleteInstructorUseCase {
    async fn execute(
        &self,
        _actor: &Actor,
        _instructor_id: Uuid,
    ) -> Result<(), DeleteInstructorError> {
        Err(DeleteInstructorError::NotFound)
    }
}

/// Every nested-record workflow reports a missing instructor.
#[derive(Default, Clone)]
pub struct StubInstructorRecordsUseCase;

#[async_trait]
impl AddSkillUseCase for StubInstructorRecordsUseCase {
    async fn execute(
        &self,
        _actor: &Actor,
        _instructor_id: Uuid,
        _form: SkillForm,
    ) -> Result<Skill, AddRecordError> {
        Err(AddRecordError::InstructorNotFound)
    }
}

#[async_trait]
impl AddEducationUseCase for StubInstructorRecordsUseCase {
    async fn execute(
        &self,
        _actor: &Actor,
        _instructor_id: Uuid,
        _form: EducationForm,
    ) -> Result<Education, AddRecordError> {
        Err(AddRecordError::InstructorNotFound)
    }
}

#[async_trait]
impl AddExperienceUseCase for StubInstructorRecordsUseCase {
    async fn execute(
        &self,
        _actor: &Actor,
        _instructor_id: Uuid,
        _form: ExperienceForm,
    ) -> Result<Experience, AddRecordError> {
        Err(AddRecordError::InstructorNotFound)
    }
}
