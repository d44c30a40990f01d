pub mod entities;
pub mod permissions;

pub use entities::{NewUser, NewUserError, SuperuserFlags, User, UserId, UserRole};
pub use permissions::{Actor, Permission, PermissionDenied};
