//! Admin authentication extractor
//!
//! Checks the `Authorization: Bearer` header against the configured admin
//! token. Without a configured token every admin request is refused.

use appeal_common::AppError;
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use tracing::warn;

use crate::response::ApiError;
use crate::state::AppState;

/// Marker for a request that presented the admin token
#[derive(Debug, Clone, Copy)]
pub struct AdminUser;

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let Some(expected) = app_state.config().admin.token.as_deref() else {
            return Err(ApiError::App(AppError::AdminDisabled));
        };

        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        if !tokens_match(bearer.token(), expected) {
            warn!("Rejected admin request with a wrong token");
            return Err(ApiError::App(AppError::InvalidToken));
        }

        Ok(AdminUser)
    }
}

/// Compare without stopping at the first differing byte
fn tokens_match(given: &str, expected: &str) -> bool {
    let (given, expected) = (given.as_bytes(), expected.as_bytes());
    given.len() == expected.len()
        && given
            .iter()
            .zip(expected)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}
