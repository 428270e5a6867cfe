use crate::config::JwtSettings;
use crate::jwt::claims::Claims;
use crate::jwt::error::JwtDecoderError;
use crate::jwt::verifier::HmacTokenVerifier;

pub struct VerifyTokenCommand {
    verifier: HmacTokenVerifier,
}

impl VerifyTokenCommand {
    pub fn new(settings: &JwtSettings) -> Result<Self, JwtDecoderError> {
        Ok(Self {
            verifier: HmacTokenVerifier::new(
                settings.key.expose().as_bytes(),
                &settings.valid_issuer,
            )?,
        })
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, JwtDecoderError> {
        self.verifier.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenIssuer;
    use crate::config::SigningKey;
    use crate::identity::UserIdentity;
    use crate::token_issuer::JwtTokenIssuer;
    use assert_matches::assert_matches;

    fn settings(key: &str, issuer: &str) -> JwtSettings {
        JwtSettings {
            key: SigningKey::from(key),
            valid_issuer: issuer.to_string(),
        }
    }

    #[test]
    fn verify_issued_token() {
        let token = JwtTokenIssuer::new()
            .build_token(
                "super-secret-key-value",
                "my-app",
                &UserIdentity::new("alice@example.com"),
            )
            .unwrap();

        let claims = VerifyTokenCommand::new(&settings("super-secret-key-value", "my-app"))
            .unwrap()
            .verify_token(&token)
            .unwrap();
        assert_eq!(claims.name(), "alice@example.com");
    }

    #[test]
    fn verify_token_from_other_key() {
        let token = JwtTokenIssuer::new()
            .build_token(
                "another-secret-key-value",
                "my-app",
                &UserIdentity::new("alice@example.com"),
            )
            .unwrap();

        let result = VerifyTokenCommand::new(&settings("super-secret-key-value", "my-app"))
            .unwrap()
            .verify_token(&token);
        assert_matches!(result, Err(JwtDecoderError::InvalidSignature));
    }
}
