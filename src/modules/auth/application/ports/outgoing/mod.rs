pub mod password_hasher;
pub mod session_registry;

pub use password_hasher::{HashError, PasswordHasher};
pub use session_registry::SessionRegistry;
