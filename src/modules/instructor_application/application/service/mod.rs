mod list_applications_service;
mod review_application_service;
mod submit_application_service;

pub use list_applications_service::ListApplicationsService;
pub use review_application_service::ReviewApplicationService;
pub use submit_application_service::SubmitApplicationService;
