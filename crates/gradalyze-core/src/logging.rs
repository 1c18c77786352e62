//! Structured logging field name constants for the Gradalyze client.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized field names across
//! every subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Operation failed and was surfaced to the caller |
//! | WARN  | Best-effort path failed (autosave, background persist) |
//! | INFO  | Lifecycle events, operation completions |
//! | DEBUG | Decision points, intermediate values |
//! | TRACE | Per-record iteration |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "store", "ingest", "orchestrator", "gateway", "dossier"
pub const SUBSYSTEM: &str = "subsystem";

/// Logical operation name.
/// Examples: "autosave", "upload", "ocr", "forecast", "archetype"
pub const OPERATION: &str = "op";

/// Numeric backend user id the operation is keyed by.
pub const USER_ID: &str = "user_id";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of grade records involved in an operation.
pub const RECORD_COUNT: &str = "record_count";

/// Endpoint path of an outbound request.
pub const ENDPOINT: &str = "endpoint";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Boolean success/failure indicator.
pub const SUCCESS: &str = "success";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
