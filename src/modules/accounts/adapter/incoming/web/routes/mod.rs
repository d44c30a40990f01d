mod activate_account;
mod forms;
mod resend_activation;
mod sign_in;
mod sign_out;
mod sign_up;

pub use activate_account::{activate_account_handler, __path_activate_account_handler};
pub use forms::{FormDescriptor, FormField, Notice, NoticeLevel};
pub use resend_activation::{
    resend_activation_form_handler,
    resend_activation_handler,
    __path_resend_activation_form_handler,
    __path_resend_activation_handler,
    ResendActivationRequest,
};
pub use sign_in::{
    sign_in_form_handler,
    sign_in_handler,
    __path_sign_in_form_handler,
    __path_sign_in_handler,
    SignInRequestDto,
    SignInResponse,
    SignedInUser,
};
pub use sign_out::{
    sign_out_get_handler,
    sign_out_handler,
    __path_sign_out_get_handler,
    __path_sign_out_handler,
};
pub use sign_up::{
    sign_up_form_handler,
    sign_up_handler,
    __path_sign_up_form_handler,
    __path_sign_up_handler,
    RegisteredUser,
    SignUpRequest,
};
