mod list_applications;
mod review_application;
mod submit_application;

pub use list_applications::{ListApplicationsError, ListApplicationsUseCase};
pub use review_application::{ReviewApplicationError, ReviewApplicationUseCase};
pub use submit_application::{SubmitApplicationError, SubmitApplicationUseCase};
