//! Webhook relay handler

use appeal_service::{RelayAppealRequest, RelayResponse};
use axum::{extract::State, Json};

use crate::extractors::AppJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Forward an appeal to the configured chat webhook
///
/// POST /api/webhook/appeal
pub async fn relay_appeal(
    State(state): State<AppState>,
    AppJson(request): AppJson<RelayAppealRequest>,
) -> ApiResult<Json<RelayResponse>> {
    state.service_context().notifier().relay(&request).await?;
    Ok(Json(RelayResponse::delivered()))
}
