//! The taxonomy index: concept store plus derived lookup tables.
//!
//! Built once per load from a [`TripleSource`], immutable afterwards except
//! through [`TaxonomyIndex::add_concept`]. The derived tables (`edges`,
//! `label_to_iris`) are never the source of truth; they are rebuildable from
//! `concepts` and kept in lockstep by the single mutation path.

use std::collections::{BTreeSet, HashMap};

use tracing::info;

use taxo_core::defaults::{DEFAULT_MAX_DEPTH, DEFAULT_NAMESPACE, UNLIMITED_DEPTH};
use taxo_core::triples::vocab;
use taxo_core::{Concept, Error, Result, TripleSource};

use crate::closure;
use crate::registry::KeyConceptRegistry;

/// Build-time configuration for a [`TaxonomyIndex`].
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Namespace prefix owned by the taxonomy. Relation targets outside it
    /// (such as `owl:Thing`) are discarded during the build.
    pub namespace: String,
    /// Hop limit applied when a traversal caller passes `None`.
    pub default_max_depth: usize,
    /// Named key-concept roots used as stable entry points.
    pub key_concepts: KeyConceptRegistry,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            default_max_depth: DEFAULT_MAX_DEPTH,
            key_concepts: KeyConceptRegistry::sali_default(),
        }
    }
}

/// In-memory index over a taxonomy graph.
///
/// All query methods take `&self` and never mutate shared state, so
/// concurrent readers need no locking. [`TaxonomyIndex::add_concept`] is the
/// only mutator and takes `&mut self`, which makes the exclusive-writer
/// contract a compile-time property.
#[derive(Debug, Clone)]
pub struct TaxonomyIndex {
    pub(crate) concepts: HashMap<String, Concept>,
    pub(crate) edges: HashMap<String, Vec<String>>,
    pub(crate) label_to_iris: HashMap<String, Vec<String>>,
    pub(crate) key_concepts: KeyConceptRegistry,
    pub(crate) namespace: String,
    pub(crate) default_max_depth: usize,
}

impl TaxonomyIndex {
    /// Build an index from an already-parsed triple source.
    ///
    /// All-or-nothing: any integrity defect (no concepts in the owned
    /// namespace, a dangling parent/child reference) fails the build and no
    /// partial index is published.
    pub fn build(source: &dyn TripleSource, config: IndexConfig) -> Result<Self> {
        let mut subjects: Vec<String> = source
            .class_subjects()
            .into_iter()
            .filter(|iri| iri.starts_with(&config.namespace))
            .collect();
        subjects.sort();
        subjects.dedup();

        if subjects.is_empty() {
            return Err(Error::Build(format!(
                "triple source contains no concepts in namespace {}",
                config.namespace
            )));
        }

        let mut concepts: HashMap<String, Concept> = HashMap::with_capacity(subjects.len());
        let mut label_to_iris: HashMap<String, Vec<String>> = HashMap::new();

        for iri in &subjects {
            let label = source.objects_of(iri, vocab::RDFS_LABEL).into_iter().next();
            let pref_labels = source.objects_of(iri, vocab::SKOS_PREF_LABEL);
            let alt_labels = source.objects_of(iri, vocab::SKOS_ALT_LABEL);
            let hidden_labels = source.objects_of(iri, vocab::SKOS_HIDDEN_LABEL);
            let definitions = source.objects_of(iri, vocab::SKOS_DEFINITION);

            // Relation targets are restricted to the owned namespace; this is
            // where external roots like owl:Thing drop out.
            let mut parents: Vec<String> = source
                .objects_of(iri, vocab::RDFS_SUBCLASS_OF)
                .into_iter()
                .filter(|p| p.starts_with(&config.namespace))
                .collect();
            parents.sort();
            parents.dedup();

            let mut children: Vec<String> = source
                .subjects_of(vocab::RDFS_SUBCLASS_OF, iri)
                .into_iter()
                .filter(|c| c.starts_with(&config.namespace))
                .collect();
            children.sort();
            children.dedup();

            // Append-only label registration: IRIs sharing a label stack up,
            // they never overwrite each other.
            if let Some(label) = &label {
                label_to_iris
                    .entry(label.clone())
                    .or_default()
                    .push(iri.clone());
            }

            concepts.insert(
                iri.clone(),
                Concept {
                    iri: iri.clone(),
                    label,
                    pref_labels,
                    alt_labels,
                    hidden_labels,
                    definitions,
                    parents,
                    children,
                    top_concept: None,
                },
            );
        }

        // Second pass: forward adjacency from the parent lists, then verify
        // that both relation directions resolve inside the index.
        let mut edges: HashMap<String, Vec<String>> = HashMap::new();
        for iri in &subjects {
            let concept = &concepts[iri];
            for parent in &concept.parents {
                if !concepts.contains_key(parent) {
                    return Err(Error::Build(format!(
                        "dangling parent reference {parent} on {iri}"
                    )));
                }
                edges.entry(parent.clone()).or_default().push(iri.clone());
            }
            for child in &concept.children {
                if !concepts.contains_key(child) {
                    return Err(Error::Build(format!(
                        "dangling child reference {child} on {iri}"
                    )));
                }
            }
        }
        for children in edges.values_mut() {
            children.sort();
            children.dedup();
        }

        let mut index = Self {
            concepts,
            edges,
            label_to_iris,
            key_concepts: config.key_concepts,
            namespace: config.namespace,
            default_max_depth: config.default_max_depth,
        };
        index.tag_top_concepts();

        info!(
            concept_count = index.concepts.len(),
            edge_count = index.edges.len(),
            "taxonomy index built"
        );
        Ok(index)
    }

    /// Tag every concept reachable from a key-concept root with that root's
    /// friendly name. Registry order (name order) decides ties; the first
    /// root to reach a concept wins.
    pub(crate) fn tag_top_concepts(&mut self) {
        let assignments: Vec<(String, String)> = self
            .key_concepts
            .iter()
            .filter(|(_, root)| self.concepts.contains_key(*root))
            .flat_map(|(name, root)| {
                let mut members = closure::descendants(&self.edges, root, UNLIMITED_DEPTH);
                members.insert(root.to_string());
                members
                    .into_iter()
                    .map(move |iri| (iri, name.to_string()))
                    .collect::<Vec<_>>()
            })
            .collect();
        for (iri, name) in assignments {
            if let Some(concept) = self.concepts.get_mut(&iri) {
                if concept.top_concept.is_none() {
                    concept.top_concept = Some(name);
                }
            }
        }
    }

    // ─── Concept store reads ───────────────────────────────────────────────

    /// Look up a concept by IRI.
    pub fn get(&self, iri: &str) -> Option<&Concept> {
        self.concepts.get(iri)
    }

    /// The full concept table.
    pub fn concepts(&self) -> &HashMap<String, Concept> {
        &self.concepts
    }

    /// All concept IRIs, sorted.
    pub fn iris(&self) -> Vec<&str> {
        let mut iris: Vec<&str> = self.concepts.keys().map(String::as_str).collect();
        iris.sort_unstable();
        iris
    }

    /// IRIs registered under a primary label. Labels are not unique; several
    /// IRIs may share one.
    pub fn iris_for_label(&self, label: &str) -> &[String] {
        self.label_to_iris.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The forward adjacency table (parent IRI to child IRIs).
    pub fn edges(&self) -> &HashMap<String, Vec<String>> {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Namespace prefix owned by this index.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Hop limit applied when a traversal caller passes `None`.
    pub fn default_max_depth(&self) -> usize {
        self.default_max_depth
    }

    // ─── Closure queries ───────────────────────────────────────────────────

    /// All IRIs reachable from `root` by following child edges, restricted to
    /// paths of at most `max_depth` hops. `None` applies the configured
    /// default; [`UNLIMITED_DEPTH`] removes the limit.
    ///
    /// A root absent from the index yields the empty set, not an error.
    pub fn descendants(&self, root: &str, max_depth: Option<usize>) -> BTreeSet<String> {
        let depth = max_depth.unwrap_or(self.default_max_depth);
        closure::descendants(&self.edges, root, depth)
    }

    /// All IRIs reachable from `root` by following parent edges, with the
    /// same depth semantics as [`TaxonomyIndex::descendants`].
    pub fn ancestors(&self, root: &str, max_depth: Option<usize>) -> BTreeSet<String> {
        let depth = max_depth.unwrap_or(self.default_max_depth);
        closure::bounded_closure(root, depth, |iri| {
            self.concepts.get(iri).map(|c| c.parents.as_slice())
        })
    }

    /// Every cycle in the child adjacency graph, deterministically ordered.
    pub fn find_cycles(&self) -> Vec<closure::Cycle> {
        closure::find_cycles(&self.edges)
    }

    // ─── Key concepts ──────────────────────────────────────────────────────

    /// The key-concept registry held by this index.
    pub fn key_concepts(&self) -> &KeyConceptRegistry {
        &self.key_concepts
    }

    /// The set of registered key-concept root IRIs.
    pub fn key_concept_iris(&self) -> BTreeSet<String> {
        self.key_concepts
            .root_iris()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Descendants of the named key-concept root. An unregistered name yields
    /// the empty set.
    pub fn key_concept_members(&self, name: &str, max_depth: Option<usize>) -> BTreeSet<String> {
        match self.key_concepts.get(name) {
            Some(root) => self.descendants(root, max_depth),
            None => BTreeSet::new(),
        }
    }

    // ─── Named taxonomy accessors (sugar over key_concept_members) ─────────

    /// Actor / Player concepts.
    pub fn actor_players(&self, max_depth: Option<usize>) -> BTreeSet<String> {
        self.key_concept_members("Actor / Player", max_depth)
    }

    /// Area of Law concepts.
    pub fn areas_of_law(&self, max_depth: Option<usize>) -> BTreeSet<String> {
        self.key_concept_members("Area of Law", max_depth)
    }

    /// Asset Type concepts.
    pub fn asset_types(&self, max_depth: Option<usize>) -> BTreeSet<String> {
        self.key_concept_members("Asset Type", max_depth)
    }

    /// Communication Modality concepts.
    pub fn communication_modalities(&self, max_depth: Option<usize>) -> BTreeSet<String> {
        self.key_concept_members("Communication Modality", max_depth)
    }

    /// Currency concepts.
    pub fn currencies(&self, max_depth: Option<usize>) -> BTreeSet<String> {
        self.key_concept_members("Currency", max_depth)
    }

    /// Data Format concepts.
    pub fn data_formats(&self, max_depth: Option<usize>) -> BTreeSet<String> {
        self.key_concept_members("Data Format", max_depth)
    }

    /// Document / Artifact concepts.
    pub fn document_artifacts(&self, max_depth: Option<usize>) -> BTreeSet<String> {
        self.key_concept_members("Document / Artifact", max_depth)
    }

    /// Engagement Terms concepts.
    pub fn engagement_terms(&self, max_depth: Option<usize>) -> BTreeSet<String> {
        self.key_concept_members("Engagement Terms", max_depth)
    }

    /// Event concepts.
    pub fn events(&self, max_depth: Option<usize>) -> BTreeSet<String> {
        self.key_concept_members("Event", max_depth)
    }

    /// Forums and Venues concepts.
    pub fn forums_venues(&self, max_depth: Option<usize>) -> BTreeSet<String> {
        self.key_concept_members("Forums and Venues", max_depth)
    }

    /// Governmental Body concepts.
    pub fn governmental_bodies(&self, max_depth: Option<usize>) -> BTreeSet<String> {
        self.key_concept_members("Governmental Body", max_depth)
    }

    /// Industry concepts.
    pub fn industries(&self, max_depth: Option<usize>) -> BTreeSet<String> {
        self.key_concept_members("Industry", max_depth)
    }

    /// LMSS Type concepts.
    pub fn lmss_types(&self, max_depth: Option<usize>) -> BTreeSet<String> {
        self.key_concept_members("LMSS Type", max_depth)
    }

    /// Legal Authorities concepts.
    pub fn legal_authorities(&self, max_depth: Option<usize>) -> BTreeSet<String> {
        self.key_concept_members("Legal Authorities", max_depth)
    }

    /// Legal Entity concepts.
    pub fn legal_entities(&self, max_depth: Option<usize>) -> BTreeSet<String> {
        self.key_concept_members("Legal Entity", max_depth)
    }

    /// Location concepts.
    pub fn locations(&self, max_depth: Option<usize>) -> BTreeSet<String> {
        self.key_concept_members("Location", max_depth)
    }

    /// Matter Narrative concepts.
    pub fn matter_narratives(&self, max_depth: Option<usize>) -> BTreeSet<String> {
        self.key_concept_members("Matter Narrative", max_depth)
    }

    /// Matter Narrative Format concepts.
    pub fn matter_narrative_formats(&self, max_depth: Option<usize>) -> BTreeSet<String> {
        self.key_concept_members("Matter Narrative Format", max_depth)
    }

    /// Objectives concepts.
    pub fn objectives(&self, max_depth: Option<usize>) -> BTreeSet<String> {
        self.key_concept_members("Objectives", max_depth)
    }

    /// Service concepts.
    pub fn services(&self, max_depth: Option<usize>) -> BTreeSet<String> {
        self.key_concept_members("Service", max_depth)
    }

    /// Standards Compatibility concepts.
    pub fn standards_compatibility(&self, max_depth: Option<usize>) -> BTreeSet<String> {
        self.key_concept_members("Standards Compatibility", max_depth)
    }

    /// Status concepts.
    pub fn statuses(&self, max_depth: Option<usize>) -> BTreeSet<String> {
        self.key_concept_members("Status", max_depth)
    }

    /// System Identifiers concepts.
    pub fn system_identifiers(&self, max_depth: Option<usize>) -> BTreeSet<String> {
        self.key_concept_members("System Identifiers", max_depth)
    }
}
