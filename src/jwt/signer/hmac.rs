use jsonwebtoken::{Algorithm, EncodingKey, Header};
use thiserror::Error;

use crate::jwt::{claims::Claims, error::JwtEncoderError, signed::SignedJwt};

use super::JwtSigner;

/// Errors that can occur when creating a HmacKeySigner.
#[derive(Debug, Error, PartialEq)]
pub enum HmacKeySignerError {
    #[error("symmetric key is empty")]
    EmptyKey,
}

/// Signer structure that uses a shared secret to sign JWTs.
pub struct HmacKeySigner {
    encoding_key: EncodingKey,
    algorithm: Algorithm,
}

/// Attempt to create a HmacKeySigner from raw key bytes.
impl TryFrom<&[u8]> for HmacKeySigner {
    type Error = HmacKeySignerError;

    fn try_from(secret: &[u8]) -> Result<Self, Self::Error> {
        // The HMAC primitive accepts an empty secret, which would make every token forgeable.
        if secret.is_empty() {
            return Err(HmacKeySignerError::EmptyKey);
        }
        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        })
    }
}

/// Sign a JWT using a shared secret.
impl JwtSigner for HmacKeySigner {
    fn sign(&self, claims: Claims) -> Result<SignedJwt, JwtEncoderError> {
        let value = jsonwebtoken::encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| JwtEncoderError::TokenEncoding(e.to_string()))?;
        Ok(SignedJwt { value })
    }
}
