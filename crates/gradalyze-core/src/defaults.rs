//! Centralized default constants for the Gradalyze client.
//!
//! **This module is the single source of truth** for all shared default
//! values. All crates should reference these constants instead of defining
//! their own magic numbers.
//!
//! Organized by domain area. When adding new constants, place them in the
//! appropriate section and document the rationale for the chosen value.

// =============================================================================
// GRADES
// =============================================================================

/// Default units assigned when a record's unit count is missing or
/// unparseable.
pub const DEFAULT_UNITS: f64 = 3.0;

/// Sentinel grade meaning "ungraded/excluded" (INC/DRP/W/NA markers).
/// Distinct from any real grade on the scale.
pub const UNGRADED_SENTINEL: f64 = 0.0;

/// The fixed discrete grading scale. Lower is better; 5.00 denotes failure.
pub const GRADE_SCALE: [f64; 10] = [
    1.0, 1.25, 1.5, 1.75, 2.0, 2.25, 2.5, 2.75, 3.0, 5.0,
];

/// Semester bucket assigned to records whose source has no semester
/// concept (OCR-only extraction).
pub const DETECTED_SEMESTER: &str = "Detected Subjects";

// =============================================================================
// AUTOSAVE
// =============================================================================

/// Debounce window for grade-list autosave: each state change restarts this
/// countdown, and only the final state after a full quiet window is written.
pub const AUTOSAVE_DEBOUNCE_MS: u64 = 800;

// =============================================================================
// API
// =============================================================================

/// Default backend base URL.
pub const API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default HTTP request timeout in seconds.
pub const API_TIMEOUT_SECS: u64 = 60;

/// Env var overriding the backend base URL.
pub const ENV_API_BASE: &str = "GRADALYZE_API_BASE";

/// Env var overriding the request timeout.
pub const ENV_API_TIMEOUT_SECS: &str = "GRADALYZE_API_TIMEOUT_SECS";

// =============================================================================
// ARCHETYPE SCORING
// =============================================================================
// Fixed parameters sent with every archetype process request. The scoring
// model itself is opaque to this client.

/// Archetype scoring discount factor.
pub const ARCHETYPE_GAMMA: f64 = 0.9;

/// Archetype scoring relevance ratio.
pub const ARCHETYPE_R: f64 = 0.7;

/// Archetype scoring temperature.
pub const ARCHETYPE_TAU: f64 = 0.8;

/// Archetype similarity metric.
pub const ARCHETYPE_SIMILARITY: &str = "cosine";

// =============================================================================
// DOSSIER PAGE GEOMETRY
// =============================================================================

/// A4 page width in millimeters.
pub const PAGE_WIDTH_MM: f64 = 210.0;

/// A4 page height in millimeters.
pub const PAGE_HEIGHT_MM: f64 = 297.0;

/// Margin on each page edge in millimeters.
pub const PAGE_MARGIN_MM: f64 = 8.0;

/// Nominal capture width in pixels (A4 width at 96 dpi).
pub const CAPTURE_WIDTH_PX: u32 = 794;

/// Pixel-density oversampling factor applied at capture time for crispness.
pub const CAPTURE_SCALE: u32 = 2;
