//! The triple-source contract consumed by the index builder.
//!
//! The core never parses serialized ontology formats itself. An external
//! parser is expected to expose subject/predicate/object queries through
//! [`TripleSource`]; [`MemoryTripleSource`] is the reference implementation
//! used by tests and by callers who already hold parsed triples.

use std::collections::HashMap;

/// Well-known vocabulary IRIs used when reading a taxonomy out of a source.
pub mod vocab {
    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `owl:Class` — the type marking taxonomy concepts.
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// `owl:Thing` — the universal root, excluded from the owned namespace.
    pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";
    /// `rdfs:label` — the primary display label.
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    /// `rdfs:subClassOf` — the is-a edge.
    pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    /// `skos:prefLabel`.
    pub const SKOS_PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";
    /// `skos:altLabel`.
    pub const SKOS_ALT_LABEL: &str = "http://www.w3.org/2004/02/skos/core#altLabel";
    /// `skos:hiddenLabel`.
    pub const SKOS_HIDDEN_LABEL: &str = "http://www.w3.org/2004/02/skos/core#hiddenLabel";
    /// `skos:definition`.
    pub const SKOS_DEFINITION: &str = "http://www.w3.org/2004/02/skos/core#definition";
}

/// Minimal query contract over an already-parsed ontology.
///
/// Implementations must return values in a stable order for an unchanged
/// source so that index builds are deterministic.
pub trait TripleSource {
    /// All subjects typed as `owl:Class`.
    fn class_subjects(&self) -> Vec<String>;

    /// Object values of every `(subject, predicate, ?)` triple.
    fn objects_of(&self, subject: &str, predicate: &str) -> Vec<String>;

    /// Subject values of every `(?, predicate, object)` triple.
    fn subjects_of(&self, predicate: &str, object: &str) -> Vec<String>;
}

/// In-memory triple store keyed both ways for the two query directions.
#[derive(Debug, Default, Clone)]
pub struct MemoryTripleSource {
    by_subject_predicate: HashMap<(String, String), Vec<String>>,
    by_predicate_object: HashMap<(String, String), Vec<String>>,
}

impl MemoryTripleSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one `(subject, predicate, object)` triple.
    pub fn insert(
        &mut self,
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) {
        let (s, p, o) = (subject.into(), predicate.into(), object.into());
        self.by_subject_predicate
            .entry((s.clone(), p.clone()))
            .or_default()
            .push(o.clone());
        self.by_predicate_object.entry((p, o)).or_default().push(s);
    }

    /// Declare `iri` as an `owl:Class`, the minimal triple for a concept.
    pub fn insert_class(&mut self, iri: impl Into<String>) {
        self.insert(iri, vocab::RDF_TYPE, vocab::OWL_CLASS);
    }

    /// Declare `child rdfs:subClassOf parent`.
    pub fn insert_subclass(&mut self, child: impl Into<String>, parent: impl Into<String>) {
        self.insert(child, vocab::RDFS_SUBCLASS_OF, parent);
    }

    /// Declare an `rdfs:label` for `iri`.
    pub fn insert_label(&mut self, iri: impl Into<String>, label: impl Into<String>) {
        self.insert(iri, vocab::RDFS_LABEL, label);
    }
}

impl TripleSource for MemoryTripleSource {
    fn class_subjects(&self) -> Vec<String> {
        self.subjects_of(vocab::RDF_TYPE, vocab::OWL_CLASS)
    }

    fn objects_of(&self, subject: &str, predicate: &str) -> Vec<String> {
        self.by_subject_predicate
            .get(&(subject.to_string(), predicate.to_string()))
            .cloned()
            .unwrap_or_default()
    }

    fn subjects_of(&self, predicate: &str, object: &str) -> Vec<String> {
        self.by_predicate_object
            .get(&(predicate.to_string(), object.to_string()))
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_query_objects() {
        let mut source = MemoryTripleSource::new();
        source.insert_label("http://example.org/R1", "Banking Law");
        source.insert("http://example.org/R1", vocab::SKOS_ALT_LABEL, "Bank Law");

        assert_eq!(
            source.objects_of("http://example.org/R1", vocab::RDFS_LABEL),
            vec!["Banking Law"]
        );
        assert_eq!(
            source.objects_of("http://example.org/R1", vocab::SKOS_ALT_LABEL),
            vec!["Bank Law"]
        );
        assert!(source
            .objects_of("http://example.org/R1", vocab::SKOS_DEFINITION)
            .is_empty());
    }

    #[test]
    fn test_subjects_of_inverse_direction() {
        let mut source = MemoryTripleSource::new();
        source.insert_subclass("http://example.org/R2", "http://example.org/R1");
        source.insert_subclass("http://example.org/R3", "http://example.org/R1");

        let children = source.subjects_of(vocab::RDFS_SUBCLASS_OF, "http://example.org/R1");
        assert_eq!(children, vec!["http://example.org/R2", "http://example.org/R3"]);
    }

    #[test]
    fn test_class_subjects() {
        let mut source = MemoryTripleSource::new();
        source.insert_class("http://example.org/R1");
        source.insert_class("http://example.org/R2");

        let subjects = source.class_subjects();
        assert_eq!(subjects.len(), 2);
        assert!(subjects.contains(&"http://example.org/R1".to_string()));
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut source = MemoryTripleSource::new();
        source.insert("s", "p", "first");
        source.insert("s", "p", "second");
        assert_eq!(source.objects_of("s", "p"), vec!["first", "second"]);
    }

    #[test]
    fn test_unknown_queries_return_empty() {
        let source = MemoryTripleSource::new();
        assert!(source.class_subjects().is_empty());
        assert!(source.objects_of("s", "p").is_empty());
        assert!(source.subjects_of("p", "o").is_empty());
    }
}
