//! The mutation gateway: the single write path into a built index.

use tracing::info;
use uuid::Uuid;

use taxo_core::defaults::IRI_MINT_ATTEMPTS;
use taxo_core::{Concept, Error, Result};

use crate::index::TaxonomyIndex;

/// Parameters for a new concept. `label` and `parents` are required; the
/// remaining fields default to empty.
#[derive(Debug, Clone, Default)]
pub struct NewConcept {
    pub label: String,
    pub parents: Vec<String>,
    pub pref_labels: Vec<String>,
    pub alt_labels: Vec<String>,
    pub hidden_labels: Vec<String>,
    pub definitions: Vec<String>,
}

impl NewConcept {
    pub fn new(label: impl Into<String>, parents: Vec<String>) -> Self {
        Self {
            label: label.into(),
            parents,
            ..Self::default()
        }
    }

    pub fn with_pref_labels(mut self, pref_labels: Vec<String>) -> Self {
        self.pref_labels = pref_labels;
        self
    }

    pub fn with_alt_labels(mut self, alt_labels: Vec<String>) -> Self {
        self.alt_labels = alt_labels;
        self
    }

    pub fn with_hidden_labels(mut self, hidden_labels: Vec<String>) -> Self {
        self.hidden_labels = hidden_labels;
        self
    }

    pub fn with_definitions(mut self, definitions: Vec<String>) -> Self {
        self.definitions = definitions;
        self
    }
}

impl TaxonomyIndex {
    /// Insert one new concept and wire it into every derived table.
    ///
    /// Preconditions are checked before any state changes, so a returned
    /// error leaves the index exactly as it was. `&mut self` serializes this
    /// against every reader and every other mutation.
    pub fn add_concept(&mut self, new: NewConcept) -> Result<String> {
        // Precondition first: every parent must already exist.
        for parent in &new.parents {
            if !self.concepts.contains_key(parent) {
                return Err(Error::ParentNotFound(parent.clone()));
            }
        }

        let iri = self.mint_iri()?;

        let NewConcept {
            label,
            mut parents,
            pref_labels,
            alt_labels,
            hidden_labels,
            definitions,
        } = new;
        // A parent named twice wires one edge, same as the build path.
        parents.sort();
        parents.dedup();

        // The new concept inherits its subtree tag from the first tagged
        // parent; concepts added under untagged roots stay untagged.
        let top_concept = parents
            .iter()
            .find_map(|p| self.concepts[p].top_concept.clone());

        for parent in &parents {
            let parent_concept = self
                .concepts
                .get_mut(parent)
                .expect("parent existence checked above");
            parent_concept.children.push(iri.clone());
            parent_concept.children.sort();
            let edge_children = self.edges.entry(parent.clone()).or_default();
            edge_children.push(iri.clone());
            edge_children.sort();
        }

        self.label_to_iris
            .entry(label.clone())
            .or_default()
            .push(iri.clone());

        self.concepts.insert(
            iri.clone(),
            Concept {
                iri: iri.clone(),
                label: Some(label),
                pref_labels,
                alt_labels,
                hidden_labels,
                definitions,
                parents,
                children: Vec::new(),
                top_concept,
            },
        );

        info!(iri = %iri, op = "add_concept", "concept added");
        Ok(iri)
    }

    /// Mint a namespace-prefixed IRI that is not already in use.
    ///
    /// UUIDv4 gives 122 bits of entropy per attempt; the retry bound turns
    /// the (practically unreachable) collision storm into a typed error
    /// instead of an unbounded loop.
    fn mint_iri(&self) -> Result<String> {
        self.mint_iri_with(|| format!("{}R{}", self.namespace, Uuid::new_v4().simple()))
    }

    /// Retry loop over a candidate generator, split out so the exhaustion
    /// path can be driven with a deterministic generator.
    fn mint_iri_with<F>(&self, mut candidate: F) -> Result<String>
    where
        F: FnMut() -> String,
    {
        for _ in 0..IRI_MINT_ATTEMPTS {
            let iri = candidate();
            if !self.concepts.contains_key(&iri) {
                return Ok(iri);
            }
        }
        Err(Error::IriSpaceExhausted(IRI_MINT_ATTEMPTS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::IndexConfig;
    use crate::registry::KeyConceptRegistry;
    use taxo_core::triples::vocab;
    use taxo_core::MemoryTripleSource;

    fn iri(suffix: &str) -> String {
        format!("http://lmss.sali.org/{suffix}")
    }

    fn build_index() -> TaxonomyIndex {
        let mut source = MemoryTripleSource::new();
        for suffix in ["R1", "R1A"] {
            source.insert_class(iri(suffix));
        }
        source.insert_label(iri("R1"), "Area of Law");
        source.insert_label(iri("R1A"), "Banking Law");
        source.insert_subclass(iri("R1A"), iri("R1"));
        source.insert(iri("R1"), vocab::SKOS_DEFINITION, "Top level.");

        let mut key_concepts = KeyConceptRegistry::new();
        key_concepts.insert("Area of Law", iri("R1"));
        TaxonomyIndex::build(
            &source,
            IndexConfig {
                key_concepts,
                ..IndexConfig::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_add_concept_round_trip() {
        let mut index = build_index();
        let new_iri = index
            .add_concept(NewConcept::new("Cyber Law", vec![iri("R1")]))
            .unwrap();

        let concept = index.get(&new_iri).unwrap();
        assert_eq!(concept.label.as_deref(), Some("Cyber Law"));
        assert_eq!(concept.parents, vec![iri("R1")]);
        assert!(index.edges()[&iri("R1")].contains(&new_iri));
        assert!(index.get(&iri("R1")).unwrap().children.contains(&new_iri));
        assert!(index.descendants(&iri("R1"), Some(1)).contains(&new_iri));
        assert_eq!(index.iris_for_label("Cyber Law"), &[new_iri.clone()]);
    }

    #[test]
    fn test_add_concept_minted_iri_in_namespace() {
        let mut index = build_index();
        let new_iri = index
            .add_concept(NewConcept::new("Cyber Law", vec![iri("R1")]))
            .unwrap();
        assert!(new_iri.starts_with("http://lmss.sali.org/"));
        assert_ne!(
            index
                .add_concept(NewConcept::new("Space Law", vec![iri("R1")]))
                .unwrap(),
            new_iri
        );
    }

    #[test]
    fn test_add_concept_unknown_parent_rejected_without_changes() {
        let mut index = build_index();
        let before = index.len();
        let err = index
            .add_concept(NewConcept::new(
                "Cyber Law",
                vec![iri("R1"), iri("Rmissing")],
            ))
            .unwrap_err();
        assert!(matches!(err, Error::ParentNotFound(p) if p == iri("Rmissing")));
        assert_eq!(index.len(), before);
        assert!(index.iris_for_label("Cyber Law").is_empty());
        assert!(!index
            .get(&iri("R1"))
            .unwrap()
            .children
            .iter()
            .any(|c| index.get(c).is_none()));
    }

    #[test]
    fn test_add_concept_multiple_parents() {
        let mut index = build_index();
        let new_iri = index
            .add_concept(NewConcept::new("Maritime Banking Law", vec![
                iri("R1"),
                iri("R1A"),
            ]))
            .unwrap();
        let concept = index.get(&new_iri).unwrap();
        assert_eq!(concept.parents.len(), 2);
        assert!(index.edges()[&iri("R1")].contains(&new_iri));
        assert!(index.edges()[&iri("R1A")].contains(&new_iri));
    }

    #[test]
    fn test_add_concept_duplicate_parent_wires_single_edge() {
        let mut index = build_index();
        let new_iri = index
            .add_concept(NewConcept::new("Cyber Law", vec![iri("R1"), iri("R1")]))
            .unwrap();

        let concept = index.get(&new_iri).unwrap();
        assert_eq!(concept.parents, vec![iri("R1")]);
        let wired = |children: &[String]| children.iter().filter(|c| **c == new_iri).count();
        assert_eq!(wired(&index.get(&iri("R1")).unwrap().children), 1);
        assert_eq!(wired(&index.edges()[&iri("R1")]), 1);
    }

    #[test]
    fn test_mint_iri_retry_bound_exhausts() {
        let index = build_index();
        let taken = iri("R1");
        let mut calls = 0;
        let err = index
            .mint_iri_with(|| {
                calls += 1;
                taken.clone()
            })
            .unwrap_err();
        assert!(matches!(err, Error::IriSpaceExhausted(n) if n == IRI_MINT_ATTEMPTS));
        assert_eq!(calls, IRI_MINT_ATTEMPTS);
    }

    #[test]
    fn test_mint_iri_with_skips_taken_candidates() {
        let index = build_index();
        let mut candidates = vec![iri("R1"), iri("R1A"), iri("Rfree")].into_iter();
        let minted = index
            .mint_iri_with(|| candidates.next().expect("generator not exhausted"))
            .unwrap();
        // R1 and R1A are taken; the first free candidate wins.
        assert_eq!(minted, iri("Rfree"));
    }

    #[test]
    fn test_add_concept_inherits_top_concept() {
        let mut index = build_index();
        let new_iri = index
            .add_concept(NewConcept::new("Cyber Law", vec![iri("R1A")]))
            .unwrap();
        assert_eq!(
            index.get(&new_iri).unwrap().top_concept.as_deref(),
            Some("Area of Law")
        );
    }

    #[test]
    fn test_add_concept_optional_fields() {
        let mut index = build_index();
        let new_iri = index
            .add_concept(
                NewConcept::new("Cyber Law", vec![iri("R1")])
                    .with_alt_labels(vec!["Internet Law".to_string()])
                    .with_definitions(vec!["Law of computer networks.".to_string()]),
            )
            .unwrap();
        let concept = index.get(&new_iri).unwrap();
        assert_eq!(concept.alt_labels, vec!["Internet Law"]);
        assert_eq!(concept.definitions.len(), 1);
        assert!(concept.hidden_labels.is_empty());
    }
}
