pub mod activate_account;
pub mod create_superuser;
pub mod create_user;
pub mod resend_activation;
pub mod sign_in;
pub mod sign_out;
