pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::accounts;
pub use modules::email;
pub use modules::instructor;
pub use modules::instructor_application;
pub use modules::profile;

use crate::accounts::adapter::incoming::web::session_cookie::SessionCookieConfig;
use crate::accounts::adapter::outgoing::{
    ActivationTokenConfig, Argon2Hasher, JwtActivationTokens, SessionStoreRedis,
    UserQueryPostgres, UserRepositoryPostgres,
};
use crate::accounts::application::account_use_cases::AccountUseCases;
use crate::accounts::application::domain::SuperuserFlags;
use crate::accounts::application::helpers::{CredentialResolver, SessionResolver};
use crate::accounts::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::accounts::application::ports::outgoing::{
    ActivationTokenProvider, PasswordHasher, SessionStore, UserQuery,
};
use crate::accounts::application::services::password::RegistrationPasswordPolicy;
use crate::accounts::application::use_cases::{
    activate_account::ActivateAccountUseCase,
    create_superuser::{CreateSuperuserInput, CreateSuperuserUseCase, ICreateSuperuserUseCase},
    create_user::CreateUserUseCase,
    resend_activation::ResendActivationUseCase,
    sign_in::{SignInPolicy, SignInUseCase},
    sign_out::SignOutUseCase,
};
use crate::api::openapi::ApiDoc;
use crate::email::adapter::outgoing::{LogEmailSender, SmtpConfig, SmtpEmailSender};
use crate::email::application::ports::outgoing::{AccountEmailNotifier, EmailSender};
use crate::email::application::services::ActivationEmailService;
use crate::instructor::adapter::outgoing::InstructorRepositoryPostgres;
use crate::instructor::application::instructor_use_cases::InstructorUseCases;
use crate::instructor::application::service::{
    AddInstructorRecordService, CreateInstructorService, DeleteInstructorService,
    GetInstructorService,
};
use crate::instructor_application::adapter::outgoing::ApplicationRepositoryPostgres;
use crate::instructor_application::application::application_use_cases::InstructorApplicationUseCases;
use crate::instructor_application::application::service::{
    ListApplicationsService, ReviewApplicationService, SubmitApplicationService,
};
use crate::profile::adapter::outgoing::ProfileRepositoryPostgres;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::service::{
    GetOwnProfileService, GetPublicProfileService, UpdateOwnProfileService,
};
use crate::shared::api::custom_json_config;
use crate::shared::config;
use crate::shared::request_context::SiteConfig;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountUseCases,
    pub profile: ProfileUseCases,
    pub instructor_applications: InstructorApplicationUseCases,
    pub instructors: InstructorUseCases,
    pub session_resolver: SessionResolver,
    pub session_cookie: SessionCookieConfig,
}

#[cfg(not(tarpaulin_include))]
async fn connect_database() -> anyhow::Result<DatabaseConnection> {
    let db_url = config::required("DATABASE_URL")?;

    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&conn, None)
        .await
        .context("Failed to apply migrations")?;

    Ok(conn)
}

#[cfg(not(tarpaulin_include))]
fn email_sender(env_name: &str) -> anyhow::Result<Arc<dyn EmailSender + Send + Sync>> {
    let backend = config::optional_or("EMAIL_BACKEND", "smtp");
    if backend == "log" {
        info!("Emails are logged, not sent");
        return Ok(Arc::new(LogEmailSender::new()));
    }

    // Local Mailpit for the test environment, authenticated relay otherwise
    let smtp = if env_name == "test" {
        SmtpConfig::local_from_env()?
    } else {
        SmtpConfig::relay_from_env()?
    };
    let sender = SmtpEmailSender::from_config(&smtp).map_err(anyhow::Error::msg)?;

    Ok(Arc::new(sender))
}

/// `createsuperuser <email> <username>`, password taken from `SUPERUSER_PASSWORD`.
#[cfg(not(tarpaulin_include))]
async fn create_superuser(
    db: Arc<DatabaseConnection>,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    args: &[String],
) -> anyhow::Result<()> {
    let [email, username] = args else {
        anyhow::bail!("usage: createsuperuser <email> <username>");
    };

    let use_case = CreateSuperuserUseCase::new(UserRepositoryPostgres::new(db), hasher);
    let user = use_case
        .execute(CreateSuperuserInput {
            email: email.clone(),
            username: username.clone(),
            password: std::env::var("SUPERUSER_PASSWORD").ok(),
            flags: SuperuserFlags::default(),
        })
        .await?;

    info!(user_id = %user.id, email = %user.email, "Superuser ready");
    Ok(())
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let env_name = config::load_env_files();
    info!(environment = %env_name, "Starting application...");

    // TLS Redis URLs need a process-wide crypto provider
    let _ = rustls::crypto::ring::default_provider().install_default();

    let host = config::required("HOST")?;
    let port = config::required("PORT")?;
    let redis_url = config::required("REDIS_URL")?;

    let db_arc = Arc::new(connect_database().await?);

    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(Argon2Hasher::from_env()?);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("createsuperuser") {
        return create_superuser(db_arc, password_hasher, &args[1..]).await;
    }

    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .context("Failed to create Redis pool")?;
    let redis_arc = Arc::new(redis_pool);

    // Accounts
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query_arc: Arc<dyn UserQuery + Send + Sync> = Arc::new(user_query.clone());
    let session_store: Arc<dyn SessionStore + Send + Sync> =
        Arc::new(SessionStoreRedis::new(Arc::clone(&redis_arc)));
    let activation_tokens: Arc<dyn ActivationTokenProvider + Send + Sync> =
        Arc::new(JwtActivationTokens::new(ActivationTokenConfig::from_env()?));

    let activation_email: Arc<dyn AccountEmailNotifier + Send + Sync> = Arc::new(
        ActivationEmailService::new(email_sender(&env_name)?, Arc::clone(&activation_tokens)),
    );

    let create_user_use_case = CreateUserUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        Arc::clone(&password_hasher),
        Arc::new(RegistrationPasswordPolicy),
    );
    let register_user_orchestrator = UserRegistrationOrchestrator::new(
        Arc::new(create_user_use_case),
        Arc::clone(&activation_email),
    );

    let sign_in_use_case = SignInUseCase::new(
        CredentialResolver::new(Arc::clone(&user_query_arc), Arc::clone(&password_hasher)),
        Arc::clone(&session_store),
        user_repo.clone(),
        SignInPolicy::from_env()?,
    );

    let accounts = AccountUseCases {
        register: Arc::new(register_user_orchestrator),
        sign_in: Arc::new(sign_in_use_case),
        sign_out: Arc::new(SignOutUseCase::new(Arc::clone(&session_store))),
        activate: Arc::new(ActivateAccountUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            activation_tokens,
        )),
        resend_activation: Arc::new(ResendActivationUseCase::new(
            user_query.clone(),
            activation_email,
        )),
    };

    // Profile
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let profile = ProfileUseCases {
        get_own: Arc::new(GetOwnProfileService::new(profile_repo.clone())),
        update_own: Arc::new(UpdateOwnProfileService::new(profile_repo.clone())),
        get_public: Arc::new(GetPublicProfileService::new(user_query.clone(), profile_repo)),
    };

    // Instructor applications
    let application_repo = ApplicationRepositoryPostgres::new(Arc::clone(&db_arc));
    let instructor_applications = InstructorApplicationUseCases {
        submit: Arc::new(SubmitApplicationService::new(application_repo.clone())),
        list: Arc::new(ListApplicationsService::new(application_repo.clone())),
        review: Arc::new(ReviewApplicationService::new(application_repo)),
    };

    // Instructors
    let instructor_repo = InstructorRepositoryPostgres::new(Arc::clone(&db_arc));
    let records = Arc::new(AddInstructorRecordService::new(instructor_repo.clone()));
    let instructors = InstructorUseCases {
        create: Arc::new(CreateInstructorService::new(
            instructor_repo.clone(),
            user_query.clone(),
        )),
        get: Arc::new(GetInstructorService::new(instructor_repo.clone(), user_query)),
        delete: Arc::new(DeleteInstructorService::new(instructor_repo)),
        add_skill: records.clone(),
        add_education: records.clone(),
        add_experience: records,
    };

    let state = AppState {
        accounts,
        profile,
        instructor_applications,
        instructors,
        session_resolver: SessionResolver::new(session_store, user_query_arc),
        session_cookie: SessionCookieConfig::from_env()?,
    };

    let site = web::Data::new(SiteConfig::from_env()?);
    info!(domain = %site.domain, allowed_hosts = ?site.allowed_hosts, "Site configured");

    let server_url = format!("{host}:{port}");
    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(site.clone())
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::accounts::adapter::incoming::web::routes as accounts;
    use crate::instructor::adapter::incoming::web::routes as instructors;
    use crate::instructor_application::adapter::incoming::web::routes as applications;
    use crate::profile::adapter::incoming::web::routes as profile;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Accounts
    cfg.service(accounts::sign_in_form_handler);
    cfg.service(accounts::sign_in_handler);
    cfg.service(accounts::sign_out_get_handler);
    cfg.service(accounts::sign_out_handler);
    cfg.service(accounts::sign_up_form_handler);
    cfg.service(accounts::sign_up_handler);
    cfg.service(accounts::activate_account_handler);
    cfg.service(accounts::resend_activation_form_handler);
    cfg.service(accounts::resend_activation_handler);
    // Profile
    cfg.service(profile::get_own_profile_handler);
    cfg.service(profile::update_own_profile_handler);
    cfg.service(profile::get_public_profile_handler);
    // Instructor applications
    cfg.service(applications::submit_application_handler);
    cfg.service(applications::list_applications_handler);
    cfg.service(applications::review_application_handler);
    // Instructors
    cfg.service(instructors::create_instructor_handler);
    cfg.service(instructors::get_instructor_handler);
    cfg.service(instructors::delete_instructor_handler);
    cfg.service(instructors::add_skill_handler);
    cfg.service(instructors::add_education_handler);
    cfg.service(instructors::add_experience_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
