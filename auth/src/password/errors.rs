use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password is empty")]
    EmptyPassword,

    /// Argon2 refused to hash the input.
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// The stored hash is not one this service produces.
    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
