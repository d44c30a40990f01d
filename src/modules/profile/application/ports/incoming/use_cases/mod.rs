mod get_own_profile;
mod get_public_profile;
mod update_own_profile;

pub use get_own_profile::{GetOwnProfileError, GetOwnProfileUseCase};
pub use get_public_profile::{GetPublicProfileError, GetPublicProfileUseCase};
pub use update_own_profile::{UpdateOwnProfileError, UpdateOwnProfileUseCase};
