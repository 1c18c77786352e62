//! Transcript ingestion flow: optimistic preview, upload, OCR extraction,
//! then normalization into the grade store.
//!
//! Upload and OCR are strictly sequential: extraction depends on the storage
//! path the upload returns. Any error along the way restores the prior
//! transcript state, so no partial state is ever left visible.

use std::sync::Arc;

use gradalyze_core::normalize::normalize_ocr;
use gradalyze_core::{Error, ExistingTranscript, Result};
use tokio::sync::RwLock;

use crate::rollback::Optimistic;
use crate::store::GradeStore;
use crate::transcript::TranscriptGateway;

/// Named progress phases reported during ingestion for UI parity. The SPA
/// held each for a minimum dwell purely for perceived progress; no dwell is
/// applied here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestStage {
    UploadConfirmed,
    AnalyzingStructure,
    RunningOcr,
    ExtractingGrades,
    Done,
}

/// Outcome of a successful ingestion round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Extracted and stored this many grade records.
    Extracted(usize),
    /// The OCR response carried no grade values: a soft outcome, the upload
    /// itself stands.
    NoGradesFound,
}

/// Transcript view state owned by the flow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranscriptState {
    pub transcript: Option<ExistingTranscript>,
    pub uploading: bool,
    pub stage: Option<IngestStage>,
    /// Approximate upload size in KB (rounded up, minimum 1) while the
    /// optimistic preview is shown.
    pub temp_size_kb: Option<u64>,
}

pub struct TranscriptIngestFlow {
    gateway: TranscriptGateway,
    state: Arc<RwLock<TranscriptState>>,
}

impl TranscriptIngestFlow {
    pub fn new(gateway: TranscriptGateway) -> Self {
        Self {
            gateway,
            state: Arc::new(RwLock::new(TranscriptState::default())),
        }
    }

    /// Seed the flow from a previously persisted transcript pointer.
    pub async fn set_existing(&self, transcript: Option<ExistingTranscript>) {
        self.state.write().await.transcript = transcript;
    }

    /// Snapshot of the current transcript view state.
    pub async fn state(&self) -> TranscriptState {
        self.state.read().await.clone()
    }

    /// Ingest one transcript PDF: optimistic preview, upload, OCR, then
    /// normalized grades into `store`. `on_stage` receives the named
    /// progress phases in order.
    pub async fn ingest(
        &self,
        store: &GradeStore,
        user_id: i64,
        filename: &str,
        bytes: Vec<u8>,
        mut on_stage: impl FnMut(IngestStage),
    ) -> Result<IngestOutcome> {
        if !is_pdf(filename) {
            return Err(Error::Validation(
                "Only PDF transcripts can be uploaded".to_string(),
            ));
        }

        let optimistic = Optimistic::apply(
            &self.state,
            TranscriptState {
                transcript: Some(ExistingTranscript {
                    url: format!("local://{filename}"),
                    name: filename.to_string(),
                    temp: true,
                }),
                uploading: true,
                stage: None,
                temp_size_kb: Some(approx_size_kb(bytes.len())),
            },
        )
        .await;

        let upload = match self.gateway.upload(user_id, filename, bytes.clone()).await {
            Ok(upload) => upload,
            Err(e) => {
                optimistic.revert(&self.state).await;
                self.finish().await;
                return Err(e);
            }
        };

        let persisted_url = upload
            .url
            .clone()
            .or_else(|| upload.storage_path.clone())
            .unwrap_or_default();
        {
            let mut state = self.state.write().await;
            state.transcript = Some(ExistingTranscript {
                url: persisted_url,
                name: filename.to_string(),
                temp: false,
            });
            state.temp_size_kb = None;
            state.stage = Some(IngestStage::UploadConfirmed);
        }
        on_stage(IngestStage::UploadConfirmed);

        // OCR only runs when the upload produced a storage path.
        if upload.storage_path.is_none() {
            optimistic.commit();
            self.finish().await;
            on_stage(IngestStage::Done);
            return Ok(IngestOutcome::NoGradesFound);
        }

        self.set_stage(IngestStage::AnalyzingStructure).await;
        on_stage(IngestStage::AnalyzingStructure);
        self.set_stage(IngestStage::RunningOcr).await;
        on_stage(IngestStage::RunningOcr);

        // Any error below restores the pre-ingest transcript state wholesale;
        // a half-ingested view is never left visible.
        let ocr = match self.gateway.ocr(filename, bytes).await {
            Ok(ocr) => ocr,
            Err(e) => {
                optimistic.revert(&self.state).await;
                self.finish().await;
                return Err(e);
            }
        };

        self.set_stage(IngestStage::ExtractingGrades).await;
        on_stage(IngestStage::ExtractingGrades);

        let outcome = match ocr.grade_values {
            Some(values) => {
                let records = normalize_ocr(&values);
                let count = records.len();
                tracing::info!(record_count = count, "extracted grades from transcript");
                store.replace_all(records).await;
                IngestOutcome::Extracted(count)
            }
            None => {
                tracing::info!("OCR found no grade values in transcript");
                IngestOutcome::NoGradesFound
            }
        };

        optimistic.commit();
        self.set_stage(IngestStage::Done).await;
        self.finish().await;
        on_stage(IngestStage::Done);
        Ok(outcome)
    }

    /// Delete the stored transcript, optimistically clearing the local view
    /// and restoring it if the remote delete fails.
    pub async fn remove(&self, user_id: i64) -> Result<()> {
        let prior = self.state.read().await.clone();
        let optimistic = Optimistic::apply(
            &self.state,
            TranscriptState {
                transcript: None,
                ..prior
            },
        )
        .await;

        match self.gateway.delete(user_id).await {
            Ok(()) => {
                optimistic.commit();
                Ok(())
            }
            Err(e) => {
                optimistic.revert(&self.state).await;
                Err(e)
            }
        }
    }

    async fn set_stage(&self, stage: IngestStage) {
        self.state.write().await.stage = Some(stage);
    }

    /// Always runs last: clears the uploading flag and stage label whether
    /// the flow succeeded or failed.
    async fn finish(&self) {
        let mut state = self.state.write().await;
        state.uploading = false;
        state.stage = None;
    }
}

fn is_pdf(filename: &str) -> bool {
    filename.to_lowercase().ends_with(".pdf")
}

/// File size in KB, rounded up, minimum 1.
fn approx_size_kb(len: usize) -> u64 {
    (len as u64).div_ceil(1024).max(1)
}
