mod registration_password_policy;

pub use registration_password_policy::{
    RegistrationPasswordPolicy, MAX_LENGTH as PASSWORD_MAX_LENGTH,
};
