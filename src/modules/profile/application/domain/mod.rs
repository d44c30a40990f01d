pub mod entities;

pub use entities::{Gender, Profile, ProfileChanges, ProfileView};
