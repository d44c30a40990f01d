mod list_applications;
mod review_application;
mod submit_application;

pub use list_applications::{
    list_applications_handler,
    __path_list_applications_handler,
    ListApplicationsQuery,
};
pub use review_application::{
    review_application_handler,
    __path_review_application_handler,
    ReviewApplicationRequest,
};
pub use submit_application::{
    submit_application_handler,
    __path_submit_application_handler,
    SubmitApplicationRequest,
};
