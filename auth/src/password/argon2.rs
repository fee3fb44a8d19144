use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as PhcError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;
use argon2::ARGON2ID_IDENT;

use super::errors::PasswordError;

/// Argon2id password hasher.
///
/// Every hash gets a freshly generated salt, so signing up twice with the same
/// password never stores the same string. Stored hashes keep their own cost
/// parameters, so verification keeps working after the configured cost changes.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Hasher with the Argon2 recommended cost parameters.
    pub fn new() -> Self {
        Self::with_params(Params::DEFAULT)
    }

    /// Hasher with explicit memory, iteration and parallelism costs.
    pub fn with_params(params: Params) -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }

    /// Hash a plaintext password into a PHC string.
    ///
    /// # Errors
    /// * `EmptyPassword` - Nothing to hash
    /// * `HashingFailed` - Argon2 refused the input
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::EmptyPassword);
        }

        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Check a password against a stored hash.
    ///
    /// A wrong password is `Ok(false)`. Only a hash this service could not have
    /// produced is an error.
    ///
    /// # Errors
    /// * `VerificationFailed` - Hash is not an Argon2id PHC string
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        if parsed_hash.algorithm != ARGON2ID_IDENT {
            return Err(PasswordError::VerificationFailed(format!(
                "Unsupported hash algorithm: {}",
                parsed_hash.algorithm
            )));
        }

        match self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(PhcError::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap_hasher() -> PasswordHasher {
        PasswordHasher::with_params(Params::new(1024, 1, 1, None).unwrap())
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();

        let hash = hasher.hash("pass_word!").expect("Failed to hash password");
        assert!(hash.starts_with("$argon2id$v=19$"));

        assert!(hasher.verify("pass_word!", &hash).unwrap());
        assert!(!hasher.verify("pass_word?", &hash).unwrap());
    }

    #[test]
    fn test_same_password_gets_fresh_salt() {
        let hasher = cheap_hasher();

        let first = hasher.hash("same").unwrap();
        let second = hasher.hash("same").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_empty_password_is_rejected() {
        assert!(matches!(
            cheap_hasher().hash(""),
            Err(PasswordError::EmptyPassword)
        ));
    }

    #[test]
    fn test_hash_from_other_cost_still_verifies() {
        let stored = cheap_hasher().hash("pass_word!").unwrap();

        assert!(PasswordHasher::new().verify("pass_word!", &stored).unwrap());
    }

    #[test]
    fn test_verify_rejects_foreign_hashes() {
        let hasher = cheap_hasher();

        assert!(hasher.verify("password", "invalid_hash").is_err());

        let argon2i = Argon2::new(Algorithm::Argon2i, Version::V0x13, Params::DEFAULT)
            .hash_password(b"password", &SaltString::generate(&mut OsRng))
            .unwrap()
            .to_string();
        assert!(matches!(
            hasher.verify("password", &argon2i),
            Err(PasswordError::VerificationFailed(_))
        ));
    }
}
