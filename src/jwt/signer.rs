use super::{claims::Claims, error::JwtEncoderError, signed::SignedJwt};
use hmac::{HmacKeySigner, HmacKeySignerError};
use thiserror::Error;

pub mod hmac;

/// A JWT signer.
pub trait JwtSigner {
    // Claims are consumed so a signed claim set cannot be reused for another token.
    fn sign(&self, claims: Claims) -> Result<SignedJwt, JwtEncoderError>;
}

/// Enumerates all implementations for `JwtSigner` for static dispatching reasons.
pub enum JwtSignerImpl {
    Hmac(HmacKeySigner),
}

impl JwtSigner for JwtSignerImpl {
    fn sign(&self, claims: Claims) -> Result<SignedJwt, JwtEncoderError> {
        match self {
            Self::Hmac(hmac_signer) => hmac_signer.sign(claims),
        }
    }
}

#[derive(Error, Debug)]
pub enum JwtSignerImplError {
    #[error("building HMAC JWT signer: `{0}`")]
    HmacKeySignerError(#[from] HmacKeySignerError),
}

impl From<JwtSignerImplError> for JwtEncoderError {
    fn from(err: JwtSignerImplError) -> Self {
        JwtEncoderError::InvalidKey(err.to_string())
    }
}

impl TryFrom<&[u8]> for JwtSignerImpl {
    type Error = JwtSignerImplError;

    fn try_from(key: &[u8]) -> Result<Self, Self::Error> {
        Ok(Self::Hmac(HmacKeySigner::try_from(key)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenIssuerError;
    use assert_matches::assert_matches;

    #[test]
    fn empty_key_becomes_signing_error() {
        let err = JwtSignerImpl::try_from(b"".as_slice()).err().unwrap();
        assert_matches!(
            err,
            JwtSignerImplError::HmacKeySignerError(HmacKeySignerError::EmptyKey)
        );

        let encoder_err = JwtEncoderError::from(err);
        assert_matches!(encoder_err, JwtEncoderError::InvalidKey(ref msg) => {
            assert!(msg.contains("symmetric key is empty"));
        });

        assert_matches!(
            TokenIssuerError::from(encoder_err),
            TokenIssuerError::SigningError(JwtEncoderError::InvalidKey(_))
        );
    }
}
