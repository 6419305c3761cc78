//! Path parameter extractors

use appeal_core::AppealId;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::response::ApiError;

/// Extract and check an appeal ID from the `:id` path segment
#[derive(Debug, Clone)]
pub struct AppealIdPath(pub AppealId);

#[async_trait]
impl<S> FromRequestParts<S> for AppealIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        let id = AppealId::parse(&raw).map_err(|e| ApiError::invalid_path(e.to_string()))?;
        Ok(AppealIdPath(id))
    }
}
