//! Quality-assurance checks over a built index.
//!
//! Authoring defects (missing labels, duplicate labels, cycles) are expected
//! in practice; the index tolerates them and this module reports them.
//! Findings are plain serializable records so callers can render them as
//! text, CSV, or JSON.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::index::TaxonomyIndex;

/// One QA finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub iri: String,
    pub label: Option<String>,
    pub description: String,
    /// Name of the check that produced this finding.
    pub source_check: String,
}

fn finding(index: &TaxonomyIndex, iri: &str, description: String, source_check: &str) -> Finding {
    Finding {
        iri: iri.to_string(),
        label: index.get(iri).and_then(|c| c.label.clone()),
        description,
        source_check: source_check.to_string(),
    }
}

/// Concepts with a missing or empty primary label.
pub fn check_missing_labels(index: &TaxonomyIndex) -> Vec<Finding> {
    let mut findings = Vec::new();
    for iri in index.iris() {
        let concept = index.get(iri).expect("iris() only lists stored concepts");
        match &concept.label {
            None => findings.push(finding(
                index,
                iri,
                "Missing primary label".to_string(),
                "missing_label",
            )),
            Some(label) if label.trim().is_empty() => findings.push(finding(
                index,
                iri,
                "Empty primary label".to_string(),
                "missing_label",
            )),
            Some(_) => {}
        }
    }
    findings
}

/// Concepts with no definition text.
pub fn check_missing_definitions(index: &TaxonomyIndex) -> Vec<Finding> {
    let mut findings = Vec::new();
    for iri in index.iris() {
        let concept = index.get(iri).expect("iris() only lists stored concepts");
        if concept.definitions.iter().all(|d| d.trim().is_empty()) {
            findings.push(finding(
                index,
                iri,
                "Missing definition".to_string(),
                "missing_definition",
            ));
        }
    }
    findings
}

/// Labels carrying punctuation that usually signals a pref/alt label squeezed
/// into the primary label.
pub fn check_label_punctuation(index: &TaxonomyIndex) -> Vec<Finding> {
    let mut findings = Vec::new();
    for iri in index.iris() {
        let concept = index.get(iri).expect("iris() only lists stored concepts");
        let Some(label) = &concept.label else {
            continue;
        };
        let mut flag = |description: &str| {
            findings.push(finding(
                index,
                iri,
                format!("{description}: {label}"),
                "label_punctuation",
            ));
        };
        if label.contains('(') || label.contains(')') {
            flag("Label contains parentheses");
        }
        if label.contains(" - ") {
            flag("Label contains hyphens");
        }
        if label.contains('/') {
            flag("Label contains slashes");
        }
        if label.contains(':') || label.contains(';') {
            flag("Label contains colons or semi-colons");
        }
    }
    findings
}

/// Labels shared by more than one IRI, deduplicated across all label classes
/// (primary, pref, alt, hidden).
pub fn check_duplicate_labels(index: &TaxonomyIndex) -> Vec<Finding> {
    let mut by_label: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for iri in index.iris() {
        let concept = index.get(iri).expect("iris() only lists stored concepts");
        for label in concept.matchable_labels(true, true) {
            by_label.entry(label).or_default().insert(iri);
        }
    }

    let mut findings = Vec::new();
    for (label, iris) in by_label {
        if iris.len() > 1 {
            for iri in iris {
                findings.push(finding(
                    index,
                    iri,
                    format!("Duplicate label: {label}"),
                    "duplicate_label",
                ));
            }
        }
    }
    findings
}

/// Subclass cycles, one finding per cycle against its representative IRI.
pub fn check_cycles(index: &TaxonomyIndex) -> Vec<Finding> {
    index
        .find_cycles()
        .into_iter()
        .map(|cycle| {
            finding(
                index,
                &cycle.representative,
                format!("Cycle in graph: {}", cycle.members.join(" -> ")),
                "cycle",
            )
        })
        .collect()
}

/// Run every check and return the findings sorted by IRI, then check name.
pub fn audit(index: &TaxonomyIndex) -> Vec<Finding> {
    let mut findings = Vec::new();
    findings.extend(check_missing_labels(index));
    findings.extend(check_missing_definitions(index));
    findings.extend(check_label_punctuation(index));
    findings.extend(check_duplicate_labels(index));
    findings.extend(check_cycles(index));
    findings.sort_by(|a, b| (&a.iri, &a.source_check).cmp(&(&b.iri, &b.source_check)));

    debug!(finding_count = findings.len(), op = "audit", "QA audit complete");
    findings
}
