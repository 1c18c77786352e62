//! Remote grades gateway: CRUD for a user's grade list.
//!
//! The backing store behind this gateway is the durable owner of record for
//! grade data; the in-memory [`crate::store::GradeStore`] is the sole
//! in-session owner.

use gradalyze_core::{GradeRecord, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ApiClient;
use crate::http::ensure_success;

#[derive(Debug, Clone)]
pub struct GradesGateway {
    api: ApiClient,
}

#[derive(Deserialize)]
struct GradesResponse {
    #[serde(default)]
    grades: Vec<Value>,
}

#[derive(Serialize)]
struct ReplaceRequest<'a> {
    grades: &'a [GradeRecord],
}

impl GradesGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch the user's saved grade list as raw rows. Callers normalize via
    /// the profile-reload path (`normalize_saved`).
    pub async fn fetch(&self, user_id: i64) -> Result<Vec<Value>> {
        let response = self
            .api
            .http()
            .get(self.api.url(&format!("/api/grades/{user_id}")))
            .send()
            .await?;
        let response = ensure_success(response, "Failed to load saved grades").await?;
        let body: GradesResponse = response.json().await?;
        Ok(body.grades)
    }

    /// Replace the user's whole grade list. This is the autosave and
    /// explicit-reset write path.
    pub async fn replace(&self, user_id: i64, grades: &[GradeRecord]) -> Result<()> {
        let response = self
            .api
            .http()
            .post(self.api.url(&format!("/api/grades/{user_id}")))
            .json(&ReplaceRequest { grades })
            .send()
            .await?;
        ensure_success(response, "Failed to save grades").await?;
        Ok(())
    }

    /// Append one record to the user's grade list.
    pub async fn add(&self, user_id: i64, record: &GradeRecord) -> Result<()> {
        let response = self
            .api
            .http()
            .post(self.api.url(&format!("/api/grades/{user_id}/add")))
            .json(record)
            .send()
            .await?;
        ensure_success(response, "Failed to add grade").await?;
        Ok(())
    }

    /// Delete one record by id.
    pub async fn delete(&self, user_id: i64, record_id: &str) -> Result<()> {
        let response = self
            .api
            .http()
            .post(self.api.url(&format!("/api/grades/{user_id}/delete")))
            .json(&serde_json::json!({ "id": record_id }))
            .send()
            .await?;
        ensure_success(response, "Failed to delete grade").await?;
        Ok(())
    }
}
