use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};

use crate::{error::ApiError, state::AuthConfig};

/// Static token guard extractor
///
/// Put this first in a handler's arguments to require the `Authorization`
/// header to equal the configured token, byte for byte. When no token is
/// configured every request passes.
///
/// # Example
/// ```
/// use udir_api::auth::TokenAuth;
///
/// async fn protected_route(_auth: TokenAuth) -> &'static str {
///     "ok"
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TokenAuth;

impl<S> FromRequestParts<S> for TokenAuth
where
    AuthConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_config = AuthConfig::from_ref(state);

        let Some(expected) = auth_config.token.as_deref() else {
            return Ok(Self);
        };

        let provided = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        if provided == Some(expected) {
            Ok(Self)
        } else {
            tracing::warn!(
                header_present = provided.is_some(),
                "Rejected request with invalid token"
            );
            Err(ApiError::Auth("invalid token".to_string()))
        }
    }
}
