use actix_web::cookie::Cookie;
use actix_web::web;
use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::accounts::adapter::incoming::web::session_cookie::{
    SessionCookieConfig, SESSION_COOKIE_NAME,
};
use crate::accounts::application::account_use_cases::AccountUseCases;
use crate::accounts::application::domain::User;
use crate::accounts::application::helpers::SessionResolver;
use crate::accounts::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::accounts::application::ports::outgoing::SessionRecord;
use crate::accounts::application::use_cases::{
    activate_account::IActivateAccountUseCase, create_user::ICreateUserUseCase,
    resend_activation::IResendActivationUseCase, sign_in::ISignInUseCase,
    sign_out::ISignOutUseCase,
};
use crate::instructor::application::instructor_use_cases::InstructorUseCases;
use crate::instructor::application::ports::incoming::use_cases::{
    AddEducationUseCase, AddExperienceUseCase, AddSkillUseCase, CreateInstructorUseCase,
    DeleteInstructorUseCase, GetInstructorUseCase,
};
use crate::instructor_application::application::application_use_cases::InstructorApplicationUseCases;
use crate::instructor_application::application::ports::incoming::use_cases::{
    ListApplicationsUseCase, ReviewApplicationUseCase, SubmitApplicationUseCase,
};
use crate::profile::application::ports::incoming::use_cases::{
    GetOwnProfileUseCase, GetPublicProfileUseCase, UpdateOwnProfileUseCase,
};
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::tests::support::mocks::{MockSessionStore, MockUserQuery};
use crate::tests::support::stubs::*;
use crate::AppState;

/// Session key that [`TestAppStateBuilder::with_authenticated_user`] accepts.
pub const TEST_SESSION_KEY: &str = "test-session-key";

pub fn session_cookie() -> Cookie<'static> {
    Cookie::new(SESSION_COOKIE_NAME, TEST_SESSION_KEY)
}

pub fn default_test_user_registration_orchestrator(
    create_user: Arc<dyn ICreateUserUseCase + Send + Sync>,
) -> Arc<UserRegistrationOrchestrator> {
    Arc::new(UserRegistrationOrchestrator::new(
        create_user,
        Arc::new(StubAccountEmailNotifier),
    ))
}

/// Resolver for a deployment where nobody is signed in.
fn anonymous_session_resolver() -> SessionResolver {
    let mut sessions = MockSessionStore::new();
    sessions.expect_load().returning(|_| Ok(None));

    SessionResolver::new(Arc::new(sessions), Arc::new(MockUserQuery::new()))
}

/// Resolver that maps [`TEST_SESSION_KEY`] to `user`.
fn session_resolver_for(user: User) -> SessionResolver {
    let user_id = user.id;

    let mut sessions = MockSessionStore::new();
    sessions.expect_load().returning(move |key| {
        if key != TEST_SESSION_KEY {
            return Ok(None);
        }
        let now = Utc::now();
        Ok(Some(SessionRecord {
            user_id,
            remember: false,
            created_at: now,
            expires_at: now + Duration::hours(1),
        }))
    });

    let mut users = MockUserQuery::new();
    users
        .expect_find_by_id()
        .returning(move |_| Ok(Some(user.clone())));

    SessionResolver::new(Arc::new(sessions), Arc::new(users))
}

pub struct TestAppStateBuilder {
    accounts: AccountUseCases,
    profile: ProfileUseCases,
    instructor_applications: InstructorApplicationUseCases,
    instructors: InstructorUseCases,
    session_resolver: SessionResolver,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let records = Arc::new(StubInstructorRecordsUseCase);

        Self {
            accounts: AccountUseCases {
                register: default_test_user_registration_orchestrator(Arc::new(
                    StubCreateUserUseCase,
                )),
                sign_in: Arc::new(StubSignInUseCase),
                sign_out: Arc::new(StubSignOutUseCase),
                activate: Arc::new(StubActivateAccountUseCase),
                resend_activation: Arc::new(StubResendActivationUseCase),
            },
            profile: ProfileUseCases {
                get_own: Arc::new(StubGetOwnProfileUseCase),
                update_own: Arc::new(StubUpdateOwnProfileUseCase),
                get_public: Arc::new(StubGetPublicProfileUseCase),
            },
            instructor_applications: InstructorApplicationUseCases {
                submit: Arc::new(StubSubmitApplicationUseCase),
                list: Arc::new(StubListApplicationsUseCase),
                review: Arc::new(StubReviewApplicationUseCase),
            },
            instructors: InstructorUseCases {
                create: Arc::new(StubCreateInstructorUseCase),
                get: Arc::new(StubGetInstructorUseCase),
                delete: Arc::new(StubDeleteInstructorUseCase),
                add_skill: records.clone(),
                add_education: records.clone(),
                add_experience: records,
            },
            session_resolver: anonymous_session_resolver(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_authenticated_user(mut self, user: User) -> Self {
        self.session_resolver = session_resolver_for(user);
        self
    }

    // Accounts

    pub fn with_create_user(
        mut self,
        uc: impl ICreateUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.accounts.register = default_test_user_registration_orchestrator(Arc::new(uc));
        self
    }

    pub fn with_sign_in(mut self, uc: impl ISignInUseCase + Send + Sync + 'static) -> Self {
        self.accounts.sign_in = Arc::new(uc);
        self
    }

    pub fn with_sign_out(mut self, uc: impl ISignOutUseCase + Send + Sync + 'static) -> Self {
        self.accounts.sign_out = Arc::new(uc);
        self
    }

    pub fn with_activate(
        mut self,
        uc: impl IActivateAccountUseCase + Send + Sync + 'static,
    ) -> Self {
        self.accounts.activate = Arc::new(uc);
        self
    }

    pub fn with_resend_activation(
        mut self,
        uc: impl IResendActivationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.accounts.resend_activation = Arc::new(uc);
        self
    }

    // Profile

    pub fn with_get_own_profile(
        mut self,
        uc: impl GetOwnProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.get_own = Arc::new(uc);
        self
    }

    pub fn with_update_own_profile(
        mut self,
        uc: impl UpdateOwnProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.update_own = Arc::new(uc);
        self
    }

    pub fn with_get_public_profile(
        mut self,
        uc: impl GetPublicProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.get_public = Arc::new(uc);
        self
    }

    // Instructor applications

    pub fn with_submit_application(
        mut self,
        uc: impl SubmitApplicationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.instructor_applications.submit = Arc::new(uc);
        self
    }

    pub fn with_list_applications(
        mut self,
        uc: impl ListApplicationsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.instructor_applications.list = Arc::new(uc);
        self
    }

    pub fn with_review_application(
        mut self,
        uc: impl ReviewApplicationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.instructor_applications.review = Arc::new(uc);
        self
    }

    // Instructors

    pub fn with_create_instructor(
        mut self,
        uc: impl CreateInstructorUseCase + Send + Sync + 'static,
    ) -> Self {
        self.instructors.create = Arc::new(uc);
        self
    }

    pub fn with_get_instructor(
        mut self,
        uc: impl GetInstructorUseCase + Send + Sync + 'static,
    ) -> Self {
        self.instructors.get = Arc::new(uc);
        self
    }

    pub fn with_delete_instructor(
        mut self,
        uc: impl DeleteInstructorUseCase + Send + Sync + 'static,
    ) -> Self {
        self.instructors.delete = Arc::new(uc);
        self
    }

    pub fn with_add_skill(mut self, uc: impl AddSkillUseCase + Send + Sync + 'static) -> Self {
        self.instructors.add_skill = Arc::new(uc);
        self
    }

    pub fn with_add_education(
        mut self,
        uc: impl AddEducationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.instructors.add_education = Arc::new(uc);
        self
    }

    pub fn with_add_experience(
        mut self,
        uc: impl AddExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.instructors.add_experience = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            accounts: self.accounts,
            profile: self.profile,
            instructor_applications: self.instructor_applications,
            instructors: self.instructors,
            session_resolver: self.session_resolver,
            session_cookie: SessionCookieConfig::default(),
        })
    }
}
