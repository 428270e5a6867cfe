use thiserror::Error;

#[derive(Error, Debug)]
pub enum JwtEncoderError {
    #[error("invalid signing key: `{0}`")]
    InvalidKey(String),
    // Generic error for each implementation to use
    #[error("unable to encode token: `{0}`")]
    TokenEncoding(String),
}

#[derive(Error, Debug, PartialEq)]
pub enum JwtDecoderError {
    #[error("invalid verification key: `{0}`")]
    InvalidKey(String),
    #[error("token has expired")]
    Expired,
    #[error("token signature is invalid")]
    InvalidSignature,
    #[error("token issuer does not match")]
    InvalidIssuer,
    #[error("token audience does not match")]
    InvalidAudience,
    #[error("unable to decode token: `{0}`")]
    TokenDecoding(String),
}

impl From<jsonwebtoken::errors::Error> for JwtDecoderError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            ErrorKind::InvalidIssuer => Self::InvalidIssuer,
            ErrorKind::InvalidAudience => Self::InvalidAudience,
            _ => Self::TokenDecoding(err.to_string()),
        }
    }
}
