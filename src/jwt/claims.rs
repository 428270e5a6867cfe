use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT Claims carried by an issued sign-in token.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Name of the signed-in user. The email is used here, verbatim.
    pub(crate) name: String,
    /// Random identifier, never reused and unrelated to any stored user record.
    pub(crate) unique_id: Uuid,
    /// Issuer.
    pub(crate) iss: String,
    /// Audience. Same value as the issuer.
    pub(crate) aud: String,
    /// Expiration time (as UTC timestamp).
    pub(crate) exp: u64,
}

impl Clone for Claims {
    /// Clone the Claims instance. This implies a new UUID will be generated as its `unique_id`.
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            unique_id: Uuid::new_v4(),
            iss: self.iss.clone(),
            aud: self.aud.clone(),
            exp: self.exp,
        }
    }
}

impl Claims {
    /// Create a new Claims instance where the issuer is also the audience.
    pub fn new(name: String, issuer: String, exp: u64) -> Self {
        Self {
            name,
            unique_id: Uuid::new_v4(),
            aud: issuer.clone(),
            iss: issuer,
            exp,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unique_id(&self) -> Uuid {
        self.unique_id
    }

    pub fn issuer(&self) -> &str {
        &self.iss
    }

    pub fn audience(&self) -> &str {
        &self.aud
    }

    pub fn expires_at(&self) -> u64 {
        self.exp
    }
}
