//! # gradalyze-client
//!
//! HTTP gateways, grade store, and analysis orchestration for the Gradalyze
//! client.
//!
//! This crate provides:
//! - Thin reqwest gateways for every backend endpoint (auth/profile, grade
//!   CRUD, transcript upload/OCR, analysis process/clear)
//! - The in-session [`GradeStore`] with debounced autosave
//! - The transcript ingestion flow (optimistic preview, upload, OCR,
//!   normalization)
//! - The analysis orchestrator (forecast + archetype, concurrent clears)
//!
//! All computation happens in the backend; this crate only reconciles state
//! with it over HTTP.

pub mod analysis;
pub mod auth;
pub mod config;
pub mod grades;
pub mod ingest;
pub mod orchestrator;
pub mod store;
pub mod transcript;

mod http;
mod rollback;

// Re-export core types
pub use gradalyze_core::*;

pub use analysis::{AnalysisGateway, ArchetypeOutcome};
pub use auth::{AuthGateway, AuthResponse};
pub use config::{ApiClient, ApiConfig};
pub use grades::GradesGateway;
pub use ingest::{IngestOutcome, IngestStage, TranscriptIngestFlow, TranscriptState};
pub use orchestrator::AnalysisOrchestrator;
pub use store::GradeStore;
pub use transcript::{OcrResponse, TranscriptGateway, UploadResponse};
