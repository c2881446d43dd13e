use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Could not derive a hash for the operator password")]
    Hashing,

    /// The configured `ADMIN_PASSWORD_HASH` could not be checked, as opposed
    /// to a plain password mismatch.
    #[error("Could not check the password against the configured admin hash")]
    Verification,

    #[error("Password hashing worker stopped unexpectedly")]
    BlockingTask,
}

/// Derives and checks the PHC strings that guard the single operator
/// account. Implementations run the key derivation off the async runtime.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Backs the `hash-password` command that produces `ADMIN_PASSWORD_HASH`.
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` on mismatch; errors only when `phc` itself is unusable.
    async fn verify_password(&self, password: &str, phc: &str) -> Result<bool, HashError>;
}
