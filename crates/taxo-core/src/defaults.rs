//! Centralized default constants for the taxograph system.
//!
//! **This module is the single source of truth** for all shared default
//! values. Crates reference these constants instead of defining their own
//! magic numbers.

// =============================================================================
// TRAVERSAL
// =============================================================================

/// Default hop limit for closure traversal when a caller passes `None`.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Sentinel hop limit meaning "no limit".
///
/// The visited-set guard, not the depth limit, is what guarantees termination
/// on cyclic graphs, so unlimited traversal is safe.
pub const UNLIMITED_DEPTH: usize = usize::MAX;

// =============================================================================
// SEARCH
// =============================================================================

/// Default number of ranked results returned by a search.
pub const NUM_RESULTS: usize = 10;

/// Distance assigned to a candidate with no comparable text fields (worst).
pub const WORST_DISTANCE: f64 = 1.0;

// =============================================================================
// MUTATION
// =============================================================================

/// Retry bound for unique-IRI generation before giving up.
///
/// UUIDv4 carries 122 bits of entropy, so exhausting this bound is
/// practically unreachable; the bound exists so the failure mode is a typed
/// error rather than an infinite loop.
pub const IRI_MINT_ATTEMPTS: usize = 8;

// =============================================================================
// ONTOLOGY SOURCE
// =============================================================================

/// Namespace prefix owned by the taxonomy; relation targets outside it are
/// discarded at build time.
pub const DEFAULT_NAMESPACE: &str = "http://lmss.sali.org/";

/// Default repository artifact URL for the remote ontology file.
pub const DEFAULT_REPO_ARTIFACT_URL: &str = "https://raw.githubusercontent.com/sali-legal/LMSS/";

/// Default repository branch (latest stable).
pub const DEFAULT_REPO_BRANCH: &str = "main";

/// File name of the ontology artifact within a branch.
pub const ONTOLOGY_FILE: &str = "LMSS.owl";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_defaults_are_consistent() {
        const {
            assert!(DEFAULT_MAX_DEPTH > 1);
            assert!(DEFAULT_MAX_DEPTH < UNLIMITED_DEPTH);
            assert!(IRI_MINT_ATTEMPTS >= 1);
        }
    }

    #[test]
    fn namespace_and_repo_url_shapes() {
        assert!(DEFAULT_NAMESPACE.ends_with('/'));
        assert!(DEFAULT_REPO_ARTIFACT_URL.starts_with("https://"));
        assert!(!ONTOLOGY_FILE.contains('/'));
    }
}
