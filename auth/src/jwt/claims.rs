use serde::Deserialize;
use serde::Serialize;

/// Access token payload.
///
/// Carries the authenticated username and nothing else: no subject, no
/// issued-at and no expiration. A token stays valid for as long as the
/// signing secret does.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub username: String,
}

impl Claims {
    /// Create claims for the given username.
    pub fn for_user(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// Username the token was issued to.
    pub fn username(&self) -> &str {
        &self.username
    }
}
