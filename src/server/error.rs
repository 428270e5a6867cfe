use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::TokenIssuerError;

/// Errors returned by the HTTP handlers. Configuration and signing faults are
/// server-side problems, never the client's.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("issuing token: `{0}`")]
    TokenIssuer(#[from] TokenIssuerError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::TokenIssuer(TokenIssuerError::ConfigurationError(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIGURATION_ERROR",
                "The server is not configured to issue tokens",
            ),
            ApiError::TokenIssuer(TokenIssuerError::SigningError(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SIGNING_ERROR",
                "An internal cryptographic error occurred",
            ),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: message.to_string(),
            },
        };

        (status, Json(error_response)).into_response()
    }
}
