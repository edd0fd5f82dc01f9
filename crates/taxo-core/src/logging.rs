//! Structured logging schema and field name constants for taxograph.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized names across every
//! subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Build failure, unrecoverable loader errors |
//! | WARN  | Recoverable issue, fallback applied |
//! | INFO  | Index build completion, mutations |
//! | DEBUG | Traversal and ranking decision points |
//! | TRACE | Per-concept iteration |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "graph", "search", "qa", "loader"
pub const SUBSYSTEM: &str = "subsystem";

/// Logical operation name.
/// Examples: "build", "descendants", "search_labels", "add_concept"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Concept IRI being operated on.
pub const IRI: &str = "iri";

/// Search query text.
pub const QUERY: &str = "query";

/// Hop limit applied to a traversal.
pub const MAX_DEPTH: &str = "max_depth";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Number of concepts in an index or result set.
pub const CONCEPT_COUNT: &str = "concept_count";

/// Number of forward adjacency entries.
pub const EDGE_COUNT: &str = "edge_count";

/// Number of results returned by a search or traversal.
pub const RESULT_COUNT: &str = "result_count";

/// Number of QA findings produced by a check.
pub const FINDING_COUNT: &str = "finding_count";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";

/// Initialize a global `tracing` subscriber from `RUST_LOG`, defaulting to
/// `info`. Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    tracing::debug!(op = "init_tracing", "tracing subscriber ready");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
