use serde::{Deserialize, Serialize};

/// Identity of the user signing in, as received in the request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    email: String,
}

impl UserIdentity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_keeps_email_verbatim() {
        let identity: UserIdentity =
            serde_json::from_str(r#"{"email":"  Alice@Example.COM "}"#).unwrap();
        assert_eq!(identity.email(), "  Alice@Example.COM ");
    }

    #[test]
    fn deserialize_ignores_unknown_fields() {
        let identity: UserIdentity =
            serde_json::from_str(r#"{"email":"bob@example.com","password":"ignored"}"#).unwrap();
        assert_eq!(identity, UserIdentity::new("bob@example.com"));
    }

    #[test]
    fn deserialize_without_email_fails() {
        let result = serde_json::from_str::<UserIdentity>(r#"{"name":"bob"}"#);
        assert!(result.is_err());
    }
}
