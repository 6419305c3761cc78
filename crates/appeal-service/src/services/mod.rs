//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! validation, persistence, and notification for appeals.

pub mod appeal;
pub mod context;
pub mod error;
pub mod health;
pub mod notifier;

// Re-export all services for convenience
pub use appeal::AppealService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use health::HealthService;
pub use notifier::{format_message, AppealSummary, WebhookNotifier, MAX_CONTENT_CHARS};
