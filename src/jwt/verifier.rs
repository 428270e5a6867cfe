use jsonwebtoken::{Algorithm, DecodingKey, Validation};

use super::{claims::Claims, error::JwtDecoderError};

/// Verifies tokens signed with a shared secret and bound to a single issuer, which
/// is expected as both `iss` and `aud`.
pub struct HmacTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl HmacTokenVerifier {
    pub fn new(secret: &[u8], issuer: &str) -> Result<Self, JwtDecoderError> {
        if secret.is_empty() {
            return Err(JwtDecoderError::InvalidKey("symmetric key is empty".to_owned()));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);
        validation.leeway = 0;

        Ok(Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        })
    }

    pub fn verify(&self, token: &str) -> Result<Claims, JwtDecoderError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}
