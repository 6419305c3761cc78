//! # appeal-db
//!
//! Storage layer implementing [`appeal_core::AppealRepository`].
//!
//! ## Overview
//!
//! - [`PgAppealRepository`]: the primary store, PostgreSQL via SQLx
//! - [`LocalAppealRepository`]: a JSON array on local disk, most recent first
//! - [`FallbackAppealRepository`]: tries the primary, then the fallback
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use appeal_db::{create_lazy_pool, DatabaseConfig, FallbackAppealRepository,
//!     LocalAppealRepository, PgAppealRepository};
//!
//! let pool = create_lazy_pool(&DatabaseConfig::default())?;
//! let store = FallbackAppealRepository::new(
//!     Arc::new(PgAppealRepository::new(pool)),
//!     Arc::new(LocalAppealRepository::new("./data", "zcraft_appeals")),
//! );
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_lazy_pool, create_pool, ensure_schema, ping, DatabaseConfig, PgPool};
pub use repositories::{FallbackAppealRepository, LocalAppealRepository, PgAppealRepository};
