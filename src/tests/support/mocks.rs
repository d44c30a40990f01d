use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::accounts::application::domain::{NewUser, User};
use crate::accounts::application::ports::outgoing::{
    ActivationTokenError, ActivationTokenProvider, HashError, NewSession, PasswordHasher,
    SessionRecord, SessionStore, SessionStoreError, UserQuery, UserQueryError, UserRepository,
    UserRepositoryError,
};
use crate::email::application::ports::outgoing::account_email_notifier::{
    AccountEmailError, AccountEmailNotifier,
};
use crate::email::application::ports::outgoing::email_sender::EmailSender;
use crate::instructor::application::domain::{
    Education, Experience, Instructor, NewEducation, NewExperience, NewInstructor, NewSkill, Skill,
};
use crate::instructor::application::ports::outgoing::{
    InstructorRepository, InstructorRepositoryError,
};
use crate::instructor_application::application::domain::{
    ApplicationStatus, InstructorApplication, NewInstructorApplication,
};
use crate::instructor_application::application::ports::outgoing::{
    ApplicationRepository, ApplicationRepositoryError,
};
use crate::profile::application::domain::Profile;
use crate::profile::application::ports::outgoing::{ProfileRepository, ProfileRepositoryError};
use crate::shared::request_context::RequestContext;

mock! {
    pub UserQuery {}

    #[async_trait]
    impl UserQuery for UserQuery {
        async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError>;
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;
        async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError>;
        async fn find_by_login(&self, login: &str) -> Result<Option<User>, UserQueryError>;
    }
}

mock! {
    pub UserRepository {}

    #[async_trait]
    impl UserRepository for UserRepository {
        async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;
        async fn activate_user(&self, user_id: Uuid) -> Result<User, UserRepositoryError>;
        async fn record_login(
            &self,
            user_id: Uuid,
            at: DateTime<Utc>,
        ) -> Result<(), UserRepositoryError>;
    }
}

mock! {
    pub PasswordHasher {}

    #[async_trait]
    impl PasswordHasher for PasswordHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError>;
        async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
    }
}

mock! {
    pub SessionStore {}

    #[async_trait]
    impl SessionStore for SessionStore {
        async fn create(&self, session: NewSession) -> Result<String, SessionStoreError>;
        async fn load(&self, session_key: &str) -> Result<Option<SessionRecord>, SessionStoreError>;
        async fn delete(&self, session_key: &str) -> Result<(), SessionStoreError>;
    }
}

mock! {
    pub ActivationTokens {}

    impl ActivationTokenProvider for ActivationTokens {
        fn make_token(&self, user: &User) -> Result<String, ActivationTokenError>;
        fn check_token(&self, user: &User, token: &str) -> Result<(), ActivationTokenError>;
    }
}

mock! {
    pub AccountEmailNotifier {}

    #[async_trait]
    impl AccountEmailNotifier for AccountEmailNotifier {
        async fn send_activation_email(
            &self,
            user: &User,
            ctx: &RequestContext,
        ) -> Result<(), AccountEmailError>;
    }
}

mock! {
    pub EmailSender {}

    #[async_trait]
    impl EmailSender for EmailSender {
        async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String>;
    }
}

mock! {
    pub ProfileRepository {}

    #[async_trait]
    impl ProfileRepository for ProfileRepository {
        async fn find_by_user_id(&self, user_id: Uuid)
            -> Result<Option<Profile>, ProfileRepositoryError>;
        async fn upsert(&self, profile: Profile) -> Result<Profile, ProfileRepositoryError>;
    }
}

mock! {
    pub ApplicationRepository {}

    #[async_trait]
    impl ApplicationRepository for ApplicationRepository {
        async fn create(
            &self,
            application: NewInstructorApplication,
        ) -> Result<InstructorApplication, ApplicationRepositoryError>;
        async fn find_by_id(
            &self,
            id: Uuid,
        ) -> Result<Option<InstructorApplication>, ApplicationRepositoryError>;
        async fn list(
            &self,
            status: Option<ApplicationStatus>,
        ) -> Result<Vec<InstructorApplication>, ApplicationRepositoryError>;
        async fn transition(
            &self,
            id: Uuid,
            from: ApplicationStatus,
            to: ApplicationStatus,
        ) -> Result<Option<InstructorApplication>, ApplicationRepositoryError>;
    }
}

mock! {
    pub InstructorRepository {}

    #[async_trait]
    impl InstructorRepository for InstructorRepository {
        async fn create(&self, instructor: NewInstructor)
            -> Result<Instructor, InstructorRepositoryError>;
        async fn find_by_id(&self, id: Uuid)
            -> Result<Option<Instructor>, InstructorRepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<bool, InstructorRepositoryError>;
        async fn skills(&self, instructor_id: Uuid)
            -> Result<Vec<Skill>, InstructorRepositoryError>;
        async fn educations(
            &self,
            instructor_id: Uuid,
        ) -> Result<Vec<Education>, InstructorRepositoryError>;
        async fn experiences(
            &self,
            instructor_id: Uuid,
        ) -> Result<Vec<Experience>, InstructorRepositoryError>;
        async fn add_skill(
            &self,
            instructor_id: Uuid,
            skill: NewSkill,
        ) -> Result<Skill, InstructorRepositoryError>;
        async fn add_education(
            &self,
            instructor_id: Uuid,
            education: NewEducation,
        ) -> Result<Education, InstructorRepositoryError>;
        async fn add_experience(
            &self,
            instructor_id: Uuid,
            experience: NewExperience,
        ) -> Result<Experience, InstructorRepositoryError>;
    }
}
