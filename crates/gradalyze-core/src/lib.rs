//! # gradalyze-core
//!
//! Core types, grade normalization, and session state for the Gradalyze
//! client.
//!
//! This crate provides the foundational data structures and pure logic that
//! the other Gradalyze crates depend on: the canonical [`GradeRecord`]
//! model, the OCR/profile grade normalizer, the static program catalog
//! tables, and the file-backed session context.

pub mod catalog;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod normalize;
pub mod session;

// Re-export commonly used types at crate root
pub use catalog::{curriculum_slots, find_slot, semesters, CatalogSlot};
pub use error::{Error, Result};
pub use models::{
    AnalysisResults, ArchetypePercents, CompanyRecommendation, Curriculum, ExistingTranscript,
    ForecastResult, GradeRecord, UserProfile,
};
pub use normalize::{
    coerce_grade, is_on_scale, normalize_ocr, normalize_saved, validate_for_analysis,
};
pub use session::SessionContext;
