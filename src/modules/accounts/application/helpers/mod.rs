mod credential_resolver;
mod session_resolver;
pub mod uid;

pub use credential_resolver::{CredentialResolver, ResolveCredentialsError};
pub use session_resolver::{ResolveSessionError, ResolvedSession, SessionResolver};
