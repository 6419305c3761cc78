//! # appeal-service
//!
//! Application layer containing the appeal pipeline, the webhook notifier,
//! and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AppealResponse, HealthChecks, HealthResponse, ReadinessResponse, RelayAppealRequest,
    RelayResponse, SubmitAppealRequest, UpdateStatusRequest,
};
pub use services::{
    AppealService, HealthService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, WebhookNotifier,
};
