mod get_own_profile;
mod get_public_profile;
mod update_own_profile;

pub use get_own_profile::{get_own_profile_handler, __path_get_own_profile_handler};
pub use get_public_profile::{get_public_profile_handler, __path_get_public_profile_handler};
pub use update_own_profile::{
    update_own_profile_handler,
    __path_update_own_profile_handler,
    UpdateProfileRequest,
};
