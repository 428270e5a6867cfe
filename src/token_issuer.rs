use chrono::{TimeDelta, Utc};
use tracing::debug;

use crate::identity::UserIdentity;
use crate::jwt::claims::Claims;
use crate::jwt::error::JwtEncoderError;
use crate::jwt::signer::{JwtSigner, JwtSignerImpl};
use crate::{IssuedToken, TokenIssuer, TokenIssuerError};

/// Validity window of every issued token.
pub const TOKEN_LIFETIME_MINUTES: i64 = 30;

/// Issues HS256 JWTs for a user, valid for [`TOKEN_LIFETIME_MINUTES`].
///
/// Stateless: no record of issued tokens is kept, so they cannot be revoked.
#[derive(Debug, Default, Clone, Copy)]
pub struct JwtTokenIssuer;

impl JwtTokenIssuer {
    pub fn new() -> Self {
        Self
    }

    fn expiration() -> Result<u64, TokenIssuerError> {
        let expires_at = Utc::now()
            .checked_add_signed(TimeDelta::minutes(TOKEN_LIFETIME_MINUTES))
            .ok_or_else(|| {
                JwtEncoderError::TokenEncoding("failed to calculate expiration time".to_string())
            })?;

        u64::try_from(expires_at.timestamp())
            .map_err(|e| JwtEncoderError::TokenEncoding(e.to_string()).into())
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn build_token(
        &self,
        key: &str,
        issuer: &str,
        identity: &UserIdentity,
    ) -> Result<IssuedToken, TokenIssuerError> {
        if key.is_empty() {
            return Err(TokenIssuerError::ConfigurationError(
                "signing key is empty".to_string(),
            ));
        }
        if issuer.is_empty() {
            return Err(TokenIssuerError::ConfigurationError(
                "issuer is empty".to_string(),
            ));
        }

        let claims = Claims::new(
            identity.email().to_owned(),
            issuer.to_owned(),
            Self::expiration()?,
        );
        let signer = JwtSignerImpl::try_from(key.as_bytes()).map_err(JwtEncoderError::from)?;
        let signed = signer.sign(claims)?;

        debug!(issuer, "sign-in token issued");
        Ok(signed.into_value())
    }
}
