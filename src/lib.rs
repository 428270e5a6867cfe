pub mod commands;
pub mod config;
pub mod identity;
pub mod jwt;
pub mod parameters;
pub mod server;
pub mod token_issuer;

use crate::identity::UserIdentity;
use thiserror::Error;

pub type IssuedToken = String;

#[derive(Error, Debug)]
pub enum TokenIssuerError {
    #[error("invalid configuration: `{0}`")]
    ConfigurationError(String),
    #[error("signing JWT: `{0}`")]
    SigningError(#[from] jwt::error::JwtEncoderError),
}

/// The TokenIssuer is responsible for building a signed token asserting the identity of a user.
#[cfg_attr(test, mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    fn build_token(
        &self,
        key: &str,
        issuer: &str,
        identity: &UserIdentity,
    ) -> Result<IssuedToken, TokenIssuerError>;
}
