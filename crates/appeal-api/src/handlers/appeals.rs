//! Appeal handlers
//!
//! The public submission endpoint and the admin review endpoints.

use appeal_service::{AppealResponse, AppealService, SubmitAppealRequest, UpdateStatusRequest};
use axum::{extract::State, Json};

use crate::extractors::{AdminUser, AppJson, AppealIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Submit a ban appeal
///
/// POST /api/appeals
pub async fn submit_appeal(
    State(state): State<AppState>,
    AppJson(request): AppJson<SubmitAppealRequest>,
) -> ApiResult<Created<Json<AppealResponse>>> {
    let service = AppealService::new(state.service_context());
    let response = service.submit(request).await?;
    Ok(Created(Json(response)))
}

/// List appeals, most recent first
///
/// GET /api/appeals
pub async fn list_appeals(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<AppealResponse>>> {
    let service = AppealService::new(state.service_context());
    Ok(Json(service.list_appeals().await?))
}

/// Get an appeal by ID
///
/// GET /api/appeals/:id
pub async fn get_appeal(
    State(state): State<AppState>,
    _admin: AdminUser,
    AppealIdPath(id): AppealIdPath,
) -> ApiResult<Json<AppealResponse>> {
    let service = AppealService::new(state.service_context());
    Ok(Json(service.get_appeal(&id).await?))
}

/// Approve or deny an appeal
///
/// PATCH /api/appeals/:id/status
pub async fn update_appeal_status(
    State(state): State<AppState>,
    _admin: AdminUser,
    AppealIdPath(id): AppealIdPath,
    ValidatedJson(request): ValidatedJson<UpdateStatusRequest>,
) -> ApiResult<Json<AppealResponse>> {
    let service = AppealService::new(state.service_context());
    Ok(Json(service.update_status(&id, request).await?))
}
