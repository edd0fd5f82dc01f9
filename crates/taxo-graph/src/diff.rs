//! Structural diff between two index snapshots.
//!
//! Compares the concept key sets and per-field values of two indexes (for
//! example two ontology versions) and emits plain serializable records.
//! Rendering the records is the caller's concern.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::index::TaxonomyIndex;

/// What kind of difference a [`DiffEntry`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    /// IRI present only in the right index.
    Added,
    /// IRI present only in the left index.
    Removed,
    /// IRI present in both with a differing field value.
    Changed,
}

/// One difference between two indexes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffEntry {
    pub iri: String,
    pub kind: DiffKind,
    /// Field name for `Changed` entries, `None` for added/removed IRIs.
    pub field: Option<String>,
    /// Left-side value (`None` for `Added`).
    pub left: Option<Value>,
    /// Right-side value (`None` for `Removed`).
    pub right: Option<Value>,
}

/// Field comparisons on list fields ignore ordering: the underlying label and
/// relation sets are unordered in the source ontology.
fn sorted_json(values: &[String]) -> Value {
    let mut sorted = values.to_vec();
    sorted.sort();
    Value::from(sorted)
}

/// Compare two indexes and return the differences sorted by IRI, then field.
pub fn diff_indexes(left: &TaxonomyIndex, right: &TaxonomyIndex) -> Vec<DiffEntry> {
    let mut entries = Vec::new();

    for iri in left.iris() {
        if right.get(iri).is_none() {
            entries.push(DiffEntry {
                iri: iri.to_string(),
                kind: DiffKind::Removed,
                field: None,
                left: Some(Value::from(iri)),
                right: None,
            });
        }
    }
    for iri in right.iris() {
        if left.get(iri).is_none() {
            entries.push(DiffEntry {
                iri: iri.to_string(),
                kind: DiffKind::Added,
                field: None,
                left: None,
                right: Some(Value::from(iri)),
            });
        }
    }

    for iri in left.iris() {
        let Some(l) = left.get(iri) else { continue };
        let Some(r) = right.get(iri) else { continue };

        let fields: [(&str, Value, Value); 8] = [
            ("label", Value::from(l.label.clone()), Value::from(r.label.clone())),
            ("pref_labels", sorted_json(&l.pref_labels), sorted_json(&r.pref_labels)),
            ("alt_labels", sorted_json(&l.alt_labels), sorted_json(&r.alt_labels)),
            ("hidden_labels", sorted_json(&l.hidden_labels), sorted_json(&r.hidden_labels)),
            ("definitions", sorted_json(&l.definitions), sorted_json(&r.definitions)),
            ("parents", sorted_json(&l.parents), sorted_json(&r.parents)),
            ("children", sorted_json(&l.children), sorted_json(&r.children)),
            (
                "top_concept",
                Value::from(l.top_concept.clone()),
                Value::from(r.top_concept.clone()),
            ),
        ];

        for (field, left_value, right_value) in fields {
            if left_value != right_value {
                entries.push(DiffEntry {
                    iri: iri.to_string(),
                    kind: DiffKind::Changed,
                    field: Some(field.to_string()),
                    left: Some(left_value),
                    right: Some(right_value),
                });
            }
        }
    }

    entries.sort_by(|a, b| (&a.iri, &a.field).cmp(&(&b.iri, &b.field)));
    entries
}
