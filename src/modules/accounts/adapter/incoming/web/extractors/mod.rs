mod session;

pub use session::{AuthenticatedUser, OptionalUser};
