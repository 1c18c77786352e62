//! Transcript upload, delete, and OCR gateway.

use gradalyze_core::Result;
use serde::Deserialize;
use serde_json::Value;

use crate::config::ApiClient;
use crate::http::ensure_success;

#[derive(Debug, Clone)]
pub struct TranscriptGateway {
    api: ApiClient,
}

/// Upload result: at least one of the two pointers is present on success.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    /// Public display URL of the stored transcript.
    #[serde(default)]
    pub url: Option<String>,
    /// Backend storage path; OCR extraction requires it.
    #[serde(default)]
    pub storage_path: Option<String>,
}

/// OCR extraction result. `grade_values` absent means "found nothing",
/// which is a soft outcome rather than an error.
#[derive(Debug, Clone, Deserialize)]
pub struct OcrResponse {
    #[serde(default)]
    pub grade_values: Option<Vec<Value>>,
    #[serde(default)]
    pub extracted_text: Option<String>,
}

impl TranscriptGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Upload a transcript PDF (multipart).
    pub async fn upload(
        &self,
        user_id: i64,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse> {
        let file_part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("application/pdf")
            .map_err(|e| {
                gradalyze_core::Error::Internal(format!("failed to create multipart: {e}"))
            })?;
        let form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("user_id", user_id.to_string());

        let response = self
            .api
            .http()
            .post(self.api.url("/api/transcript/upload"))
            .multipart(form)
            .send()
            .await?;
        let response = ensure_success(response, "Failed to upload transcript").await?;
        Ok(response.json().await?)
    }

    /// Remove the stored transcript.
    pub async fn delete(&self, user_id: i64) -> Result<()> {
        let response = self
            .api
            .http()
            .delete(self.api.url(&format!("/api/transcript/{user_id}")))
            .send()
            .await?;
        ensure_success(response, "Failed to delete transcript").await?;
        Ok(())
    }

    /// Run OCR extraction over the transcript file (multipart).
    pub async fn ocr(&self, filename: &str, bytes: Vec<u8>) -> Result<OcrResponse> {
        let file_part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("application/pdf")
            .map_err(|e| {
                gradalyze_core::Error::Internal(format!("failed to create multipart: {e}"))
            })?;
        let form = reqwest::multipart::Form::new().part("file", file_part);

        let response = self
            .api
            .http()
            .post(self.api.url("/api/ocr/extract"))
            .multipart(form)
            .send()
            .await?;
        let response =
            ensure_success(response, "Failed to extract grades from transcript").await?;
        Ok(response.json().await?)
    }
}
