use axum::{Json, extract::State};
use tracing::error;

use super::AppState;
use super::error::ApiError;
use crate::IssuedToken;
use crate::identity::UserIdentity;

/// Handle `POST /users/sign-in`.
///
/// The caller is not authenticated: any identity in the body gets a token. A body
/// without `email` is rejected by the `Json` extractor before reaching the issuer.
pub async fn sign_in(
    State(state): State<AppState>,
    Json(identity): Json<UserIdentity>,
) -> Result<IssuedToken, ApiError> {
    state
        .token_issuer
        .build_token(
            state.jwt.key.expose(),
            &state.jwt.valid_issuer,
            &identity,
        )
        .map_err(|e| {
            error!("failed to issue sign-in token: {e}");
            ApiError::from(e)
        })
}
