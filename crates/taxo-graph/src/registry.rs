//! Named registry of key-concept roots.
//!
//! The registry is an explicit value held by each index rather than ambient
//! global state, so several indexes (for example two ontology versions being
//! diffed) can coexist with different registries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fixed map from human-readable taxonomy names to root IRIs, supplied at
/// index-build time. Backed by a `BTreeMap` so iteration order (and with it
/// top-concept tagging) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyConceptRegistry {
    roots: BTreeMap<String, String>,
}

impl KeyConceptRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named root. Later inserts with the same name overwrite.
    pub fn insert(&mut self, name: impl Into<String>, iri: impl Into<String>) {
        self.roots.insert(name.into(), iri.into());
    }

    /// Root IRI for a friendly name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.roots.get(name).map(String::as_str)
    }

    /// Iterate `(name, iri)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.roots.iter().map(|(n, i)| (n.as_str(), i.as_str()))
    }

    /// All registered root IRIs.
    pub fn root_iris(&self) -> Vec<&str> {
        self.roots.values().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// The default registry for the SALI legal-matter ontology: the fixed set
    /// of top-level entry points, excluding deprecated and OWL root concepts.
    pub fn sali_default() -> Self {
        let mut registry = Self::new();
        for (name, iri) in [
            ("Actor / Player", "http://lmss.sali.org/R8CdMpOM0RmyrgCCvbpiLS0"),
            ("Area of Law", "http://lmss.sali.org/RSYBzf149Mi5KE0YtmpUmr"),
            ("Asset Type", "http://lmss.sali.org/RCIwc6WJi6IT7xePURxsi4T"),
            ("Communication Modality", "http://lmss.sali.org/R8qItBwG2pRMFhUq1HQEMnb"),
            ("Currency", "http://lmss.sali.org/R767niCLQVC5zIcO5WDQMSl"),
            ("Data Format", "http://lmss.sali.org/R79aItNTJQwHgR002wuX3iC"),
            ("Document / Artifact", "http://lmss.sali.org/RDt4vQCYDfY0R9fZ5FNnTbj"),
            ("Engagement Terms", "http://lmss.sali.org/R9kmGZf5FSmFdouXWQ1Nndm"),
            ("Event", "http://lmss.sali.org/R73hoH1RXYjBTYiGfolpsAF"),
            ("Forums and Venues", "http://lmss.sali.org/RBjHwNNG2ASVmasLFU42otk"),
            ("Governmental Body", "http://lmss.sali.org/RBQGborh1CfXanGZipDL0Qo"),
            ("Industry", "http://lmss.sali.org/RDIwFaFcH4KY0gwEY0QlMTp"),
            ("LMSS Type", "http://lmss.sali.org/R8uI6AZ9vSgpAdKmfGZKfTZ"),
            ("Legal Authorities", "http://lmss.sali.org/RC1CZydjfH8oiM4W3rCkma3"),
            ("Legal Entity", "http://lmss.sali.org/R7L5eLIzH0CpOUE74uJvSjL"),
            ("Location", "http://lmss.sali.org/R9aSzp9cEiBCzObnP92jYFX"),
            ("Matter Narrative", "http://lmss.sali.org/R7ReDY2v13rer1U8AyOj55L"),
            ("Matter Narrative Format", "http://lmss.sali.org/R8ONVC8pLVJC5dD4eKqCiZL"),
            ("Objectives", "http://lmss.sali.org/RlNFgB3TQfMzV26V4V7u4E"),
            ("Service", "http://lmss.sali.org/RDK1QEdQg1T8B5HQqMK2pZN"),
            ("Standards Compatibility", "http://lmss.sali.org/RB4cFSLB4xvycDlKv73dOg6"),
            ("Status", "http://lmss.sali.org/Rx69EnEj3H3TpcgTfUSoYx"),
            ("System Identifiers", "http://lmss.sali.org/R8EoZh39tWmXCkmP2Xzjl6E"),
        ] {
            registry.insert(name, iri);
        }
        registry
    }
}
