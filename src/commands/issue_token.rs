use serde::Serialize;
use thiserror::Error;

use crate::config::JwtSettings;
use crate::identity::UserIdentity;
use crate::jwt::claims::Claims;
use crate::jwt::error::JwtDecoderError;
use crate::jwt::verifier::HmacTokenVerifier;
use crate::{IssuedToken, TokenIssuer, TokenIssuerError};

#[derive(Error, Debug)]
pub enum IssueTokenError {
    #[error("issuing token: `{0}`")]
    TokenIssuer(#[from] TokenIssuerError),
    #[error("reading back issued token: `{0}`")]
    Decoding(#[from] JwtDecoderError),
}

/// Token together with the claims it carries.
#[derive(Debug, Serialize)]
pub struct IssuedTokenOutput {
    pub token: IssuedToken,
    pub claims: Claims,
}

pub struct IssueTokenCommand<T>
where
    T: TokenIssuer,
{
    token_issuer: T,
}

impl<T> IssueTokenCommand<T>
where
    T: TokenIssuer,
{
    pub fn new(token_issuer: T) -> Self {
        Self { token_issuer }
    }

    pub fn issue_token(
        &self,
        settings: &JwtSettings,
        identity: &UserIdentity,
    ) -> Result<IssuedToken, IssueTokenError> {
        Ok(self.token_issuer.build_token(
            settings.key.expose(),
            &settings.valid_issuer,
            identity,
        )?)
    }

    pub fn issue_token_with_claims(
        &self,
        settings: &JwtSettings,
        identity: &UserIdentity,
    ) -> Result<IssuedTokenOutput, IssueTokenError> {
        let token = self.issue_token(settings, identity)?;
        let verifier =
            HmacTokenVerifier::new(settings.key.expose().as_bytes(), &settings.valid_issuer)?;
        let claims = verifier.verify(&token)?;
        Ok(IssuedTokenOutput { token, claims })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockTokenIssuer;
    use crate::config::SigningKey;
    use crate::token_issuer::JwtTokenIssuer;
    use assert_matches::assert_matches;

    fn settings(key: &str) -> JwtSettings {
        JwtSettings {
            key: SigningKey::from(key),
            valid_issuer: "my-app".to_string(),
        }
    }

    #[test]
    fn issue_token_passes_settings_to_issuer() {
        let mut token_issuer = MockTokenIssuer::new();
        token_issuer
            .expect_build_token()
            .times(1)
            .returning(|key, issuer, identity| {
                assert_eq!(key, "super-secret-key-value");
                assert_eq!(issuer, "my-app");
                assert_eq!(identity.email(), "alice@example.com");
                Ok("a.b.c".to_string())
            });

        let token = IssueTokenCommand::new(token_issuer)
            .issue_token(
                &settings("super-secret-key-value"),
                &UserIdentity::new("alice@example.com"),
            )
            .unwrap();
        assert_eq!(token, "a.b.c");
    }

    #[test]
    fn issue_token_with_claims() {
        let output = IssueTokenCommand::new(JwtTokenIssuer::new())
            .issue_token_with_claims(
                &settings("super-secret-key-value"),
                &UserIdentity::new("alice@example.com"),
            )
            .unwrap();

        assert_eq!(output.token.split('.').count(), 3);
        assert_eq!(output.claims.name(), "alice@example.com");
        assert_eq!(output.claims.issuer(), "my-app");
    }

    #[test]
    fn issue_token_with_empty_key_fails() {
        let result = IssueTokenCommand::new(JwtTokenIssuer::new())
            .issue_token(&settings(""), &UserIdentity::new("alice@example.com"));

        assert_matches!(
            result,
            Err(IssueTokenError::TokenIssuer(
                TokenIssuerError::ConfigurationError(_)
            ))
        );
    }
}
