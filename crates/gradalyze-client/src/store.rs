//! In-session grade store with debounced autosave.
//!
//! The store is the sole in-memory owner of the current grade list. Every
//! mutation restarts an 800ms autosave countdown; only the state after a
//! full quiet window is written to the remote gateway (coalescing). The
//! remote store is trusted as an initializer on startup, never as a
//! destructive overwrite afterwards.

use std::sync::Arc;

use gradalyze_core::defaults::AUTOSAVE_DEBOUNCE_MS;
use gradalyze_core::normalize::{is_on_scale, normalize_saved};
use gradalyze_core::{Error, GradeRecord, Result};
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::Duration;

use crate::grades::GradesGateway;

pub struct GradeStore {
    records: Arc<RwLock<Vec<GradeRecord>>>,
    gateway: GradesGateway,
    user_id: Option<i64>,
    pending_save: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl GradeStore {
    /// `user_id` is `None` when no user is authenticated; autosave is then a
    /// no-op and only local edits apply.
    pub fn new(gateway: GradesGateway, user_id: Option<i64>) -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            gateway,
            user_id,
            pending_save: Arc::new(Mutex::new(None)),
        }
    }

    /// Snapshot of the current grade list.
    pub async fn records(&self) -> Vec<GradeRecord> {
        self.records.read().await.clone()
    }

    /// Replace the whole list (edits, OCR ingestion) and schedule autosave.
    pub async fn replace_all(&self, records: Vec<GradeRecord>) {
        *self.records.write().await = records;
        self.schedule_autosave().await;
    }

    /// Update one record's grade by id. Table edits only ever write values
    /// on the fixed scale.
    pub async fn update_grade(&self, id: &str, grade: f64) -> Result<()> {
        if !is_on_scale(grade) {
            return Err(Error::Validation(format!(
                "grade {grade} is not on the grading scale"
            )));
        }

        {
            let mut records = self.records.write().await;
            let record = records
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| Error::NotFound(format!("grade record {id}")))?;
            record.grade = grade;
        }

        self.schedule_autosave().await;
        Ok(())
    }

    /// Delete one record, locally and remotely. User-initiated, so a remote
    /// failure surfaces to the caller (the local removal stands).
    pub async fn remove(&self, id: &str) -> Result<()> {
        {
            let mut records = self.records.write().await;
            let before = records.len();
            records.retain(|r| r.id != id);
            if records.len() == before {
                return Err(Error::NotFound(format!("grade record {id}")));
            }
        }

        if let Some(user_id) = self.user_id {
            self.gateway.delete(user_id, id).await?;
        }
        Ok(())
    }

    /// Explicitly clear the whole table, locally and remotely. This is the
    /// only path that writes an empty list to the gateway.
    pub async fn reset(&self) -> Result<()> {
        self.cancel_pending().await;
        self.records.write().await.clear();

        if let Some(user_id) = self.user_id {
            self.gateway.replace(user_id, &[]).await?;
        }
        Ok(())
    }

    /// One-time startup fetch of previously saved grades. Replaces local
    /// state only when the remote list is non-empty after normalization.
    pub async fn load_remote(&self) -> Result<()> {
        let Some(user_id) = self.user_id else {
            return Ok(());
        };

        let raw = self.gateway.fetch(user_id).await?;
        let saved = normalize_saved(&raw);
        if saved.is_empty() {
            tracing::debug!(user_id, "remote grade list empty, keeping local state");
            return Ok(());
        }

        tracing::info!(user_id, record_count = saved.len(), "loaded saved grades");
        *self.records.write().await = saved;
        Ok(())
    }

    /// Abort any pending autosave without firing it.
    pub async fn shutdown(&self) {
        self.cancel_pending().await;
    }

    async fn cancel_pending(&self) {
        if let Some(handle) = self.pending_save.lock().await.take() {
            handle.abort();
        }
    }

    /// Restart the autosave countdown. The spawned task reads the list at
    /// fire time, so coalesced edits always persist the latest state.
    async fn schedule_autosave(&self) {
        let Some(user_id) = self.user_id else {
            tracing::debug!("no authenticated user, skipping autosave");
            return;
        };

        let records = Arc::clone(&self.records);
        let gateway = self.gateway.clone();

        let mut pending = self.pending_save.lock().await;
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(AUTOSAVE_DEBOUNCE_MS)).await;

            let snapshot = records.read().await.clone();
            // An empty list is only ever written via the explicit reset path.
            if snapshot.is_empty() {
                return;
            }

            if let Err(e) = gateway.replace(user_id, &snapshot).await {
                tracing::warn!(user_id, error = %e, "autosave failed");
            } else {
                tracing::debug!(user_id, record_count = snapshot.len(), "autosaved grades");
            }
        }));
    }
}

impl Drop for GradeStore {
    fn drop(&mut self) {
        // Teardown cancels the countdown so no orphaned write fires.
        if let Ok(mut pending) = self.pending_save.try_lock() {
            if let Some(handle) = pending.take() {
                handle.abort();
            }
        }
    }
}
