mod get_own_profile_service;
mod get_public_profile_service;
mod update_own_profile_service;

pub use get_own_profile_service::GetOwnProfileService;
pub use get_public_profile_service::GetPublicProfileService;
pub use update_own_profile_service::UpdateOwnProfileService;
