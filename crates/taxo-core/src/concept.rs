//! The concept record: one taxonomy class per IRI.

use serde::{Deserialize, Serialize};

/// One class/node in the taxonomy, identified by a globally unique IRI.
///
/// Labels fall into four classes mirroring the source ontology's annotation
/// properties: the primary display label, preferred labels, alternate labels,
/// and hidden labels. Duplicate labels across concepts are valid and expected;
/// detecting them is a QA concern, not an index invariant.
///
/// `parents` and `children` hold direct edges only. Zero parents (a root) and
/// multiple parents (multiple inheritance) are both legal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    /// Globally unique key, immutable once created.
    pub iri: String,
    /// Primary display name.
    pub label: Option<String>,
    /// Preferred label synonyms.
    #[serde(default)]
    pub pref_labels: Vec<String>,
    /// Alternate label synonyms.
    #[serde(default)]
    pub alt_labels: Vec<String>,
    /// Hidden label synonyms (misspellings, legacy names).
    #[serde(default)]
    pub hidden_labels: Vec<String>,
    /// Definition text, possibly several per concept.
    #[serde(default)]
    pub definitions: Vec<String>,
    /// Direct parent IRIs.
    #[serde(default)]
    pub parents: Vec<String>,
    /// Direct child IRIs.
    #[serde(default)]
    pub children: Vec<String>,
    /// Friendly name of the key-concept subtree this IRI falls under, if any.
    pub top_concept: Option<String>,
}

impl Concept {
    /// Create an empty concept with only an IRI.
    pub fn new(iri: impl Into<String>) -> Self {
        Self {
            iri: iri.into(),
            label: None,
            pref_labels: Vec::new(),
            alt_labels: Vec::new(),
            hidden_labels: Vec::new(),
            definitions: Vec::new(),
            parents: Vec::new(),
            children: Vec::new(),
            top_concept: None,
        }
    }

    /// All label text usable for matching, honoring the alt/hidden toggles.
    ///
    /// The primary label comes first, then pref labels, then (optionally) alt
    /// and hidden labels. Order is stable so repeated calls compare the same
    /// fields in the same sequence.
    pub fn matchable_labels(&self, include_alt: bool, include_hidden: bool) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        if let Some(label) = &self.label {
            labels.push(label.as_str());
        }
        labels.extend(self.pref_labels.iter().map(String::as_str));
        if include_alt {
            labels.extend(self.alt_labels.iter().map(String::as_str));
        }
        if include_hidden {
            labels.extend(self.hidden_labels.iter().map(String::as_str));
        }
        labels
    }
}
