//! Local JSON-file implementation of AppealRepository
//!
//! All appeals live in one JSON array at `<data_dir>/<key>.json`, most recent
//! first. Every write is a read-modify-write of the whole list, serialized by
//! an async mutex and committed with a write-to-temp-then-rename.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use appeal_core::traits::{AppealRepository, RepoResult};
use appeal_core::{Appeal, AppealId, AppealStatus, DomainError};

use crate::models::AppealRecord;

use super::error::{appeal_not_found, map_io_error};

/// Local fallback store backed by a single JSON file
#[derive(Debug)]
pub struct LocalAppealRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl LocalAppealRepository {
    /// Create a store keeping its list under `key` inside `data_dir`
    ///
    /// Characters outside `[A-Za-z0-9_-]` in the key are replaced with `_`.
    pub fn new(data_dir: impl Into<PathBuf>, key: &str) -> Self {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        Self {
            path: data_dir.into().join(format!("{file_name}.json")),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check that the data directory exists and is writable
    pub async fn health_check(&self) -> RepoResult<()> {
        let dir = self.data_dir();
        fs::create_dir_all(dir)
            .await
            .map_err(|e| map_io_error("create data dir", e))?;

        let marker = dir.join(".write-check");
        fs::write(&marker, b"ok")
            .await
            .map_err(|e| map_io_error("write check file", e))?;
        fs::remove_file(&marker)
            .await
            .map_err(|e| map_io_error("remove check file", e))?;
        Ok(())
    }

    fn data_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    async fn read_records(&self) -> RepoResult<Vec<AppealRecord>> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(map_io_error("read appeals", e)),
        };

        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&raw).map_err(|e| {
            DomainError::StorageError(format!("decode {}: {e}", self.path.display()))
        })
    }

    async fn write_records(&self, records: &[AppealRecord]) -> RepoResult<()> {
        fs::create_dir_all(self.data_dir())
            .await
            .map_err(|e| map_io_error("create data dir", e))?;

        let encoded = serde_json::to_vec_pretty(records)
            .map_err(|e| DomainError::StorageError(format!("encode appeals: {e}")))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, encoded)
            .await
            .map_err(|e| map_io_error("write appeals", e))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| map_io_error("commit appeals", e))?;

        debug!(path = %self.path.display(), count = records.len(), "Local appeals written");
        Ok(())
    }
}

#[async_trait]
impl AppealRepository for LocalAppealRepository {
    fn backend(&self) -> &'static str {
        "local"
    }

    #[instrument(skip(self, appeal), fields(appeal_id = %appeal.id))]
    async fn create(&self, appeal: &Appeal) -> RepoResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_records().await?;
        if records.iter().any(|r| r.id == appeal.id) {
            return Err(DomainError::AppealAlreadyExists(appeal.id.to_string()));
        }
        records.insert(0, AppealRecord::from(appeal));
        self.write_records(&records).await
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Appeal>> {
        Ok(self
            .read_records()
            .await?
            .into_iter()
            .map(Appeal::from)
            .collect())
    }

    #[instrument(skip(self), fields(appeal_id = %id))]
    async fn find_by_id(&self, id: &AppealId) -> RepoResult<Option<Appeal>> {
        Ok(self
            .read_records()
            .await?
            .into_iter()
            .find(|r| &r.id == id)
            .map(Appeal::from))
    }

    #[instrument(skip(self), fields(appeal_id = %id))]
    async fn update_status(&self, id: &AppealId, status: AppealStatus) -> RepoResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_records().await?;
        let record = records
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| appeal_not_found(id))?;
        if !record.status.can_transition_to(status) {
            return Err(DomainError::InvalidStatusTransition {
                from: record.status,
                to: status,
            });
        }
        record.status = status;
        self.write_records(&records).await
    }
}
