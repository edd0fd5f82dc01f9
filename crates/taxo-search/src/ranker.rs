//! Ranked fuzzy search over concept labels and definitions.
//!
//! Every hit carries three boolean match classes (exact, prefix, substring,
//! tested case-insensitively on the unnormalized text) and one numeric
//! distance in `[0, 1]` computed on stopword-folded text. Results sort by
//! match class first, then distance, with the IRI as the final tiebreak so
//! equal-scoring hits always come back in the same order. Scores live on the
//! hit, never on the concept itself.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use taxo_core::defaults::{NUM_RESULTS, WORST_DISTANCE};
use taxo_core::Concept;
use taxo_graph::TaxonomyIndex;

use crate::distance;
use crate::normalize;

/// One ranked search result.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    /// The matched concept, copied out of the index.
    pub concept: Concept,
    /// A field equals the query, ignoring case.
    pub exact: bool,
    /// A field starts with the query, ignoring case.
    pub starts_with: bool,
    /// A field contains the query, ignoring case.
    pub substring: bool,
    /// Best distance across the concept's fields; 0 is perfect, 1 is worst.
    pub distance: f64,
}

/// Restrict candidates to the subtree under `iri`.
#[derive(Debug, Clone)]
pub struct Scope {
    /// Root of the candidate subtree, included in the candidates itself.
    pub iri: String,
    /// Hop limit for the subtree walk; `None` uses the index default.
    pub depth: Option<usize>,
}

/// Knobs for a single search call.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Optional subtree restriction. `None` searches the whole index.
    pub scope: Option<Scope>,
    /// Maximum number of hits returned.
    pub num_results: usize,
    /// Whether alternate labels participate in label matching.
    pub include_alt_labels: bool,
    /// Whether hidden labels participate in label matching.
    pub include_hidden_labels: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            scope: None,
            num_results: NUM_RESULTS,
            include_alt_labels: true,
            include_hidden_labels: true,
        }
    }
}

/// Fuzzy searcher borrowing an immutable index.
///
/// Holding `&TaxonomyIndex` means any number of searchers can run against one
/// index concurrently; a mutation requires exclusive access and therefore
/// cannot overlap a search.
pub struct FuzzySearch<'a> {
    index: &'a TaxonomyIndex,
}

impl<'a> FuzzySearch<'a> {
    pub fn new(index: &'a TaxonomyIndex) -> Self {
        Self { index }
    }

    /// Rank concepts by how well their labels match `query`.
    pub fn search_labels(&self, query: &str, opts: &SearchOptions) -> Vec<SearchHit> {
        let hits = self.search_with(query, opts, |concept, query_lower, query_folded| {
            score_labels(concept, query_lower, query_folded, opts)
        });
        debug!(
            query = query,
            op = "search_labels",
            result_count = hits.len(),
            "label search complete"
        );
        hits
    }

    /// Rank concepts by how well their definition text matches `query`.
    pub fn search_definitions(&self, query: &str, opts: &SearchOptions) -> Vec<SearchHit> {
        let hits = self.search_with(query, opts, |concept, query_lower, query_folded| {
            score_definitions(concept, query_lower, query_folded)
        });
        debug!(
            query = query,
            op = "search_definitions",
            result_count = hits.len(),
            "definition search complete"
        );
        hits
    }

    fn search_with<F>(&self, query: &str, opts: &SearchOptions, score: F) -> Vec<SearchHit>
    where
        F: Fn(&Concept, &str, &str) -> (bool, bool, bool, f64),
    {
        let query_lower = query.to_lowercase();
        let query_folded = normalize::fold(query);

        let mut hits: Vec<SearchHit> = self
            .candidates(opts)
            .into_iter()
            .filter_map(|iri| self.index.get(&iri))
            .map(|concept| {
                let (exact, starts_with, substring, distance) =
                    score(concept, &query_lower, &query_folded);
                SearchHit {
                    concept: concept.clone(),
                    exact,
                    starts_with,
                    substring,
                    distance,
                }
            })
            .collect();

        hits.sort_by(compare_hits);
        hits.truncate(opts.num_results);
        hits
    }

    /// Candidate IRIs for a search: the whole index, or the scope subtree
    /// plus the scope root itself.
    fn candidates(&self, opts: &SearchOptions) -> BTreeSet<String> {
        match &opts.scope {
            None => self.index.iris().into_iter().map(str::to_string).collect(),
            Some(scope) => {
                let mut members = self.index.descendants(&scope.iri, scope.depth);
                if self.index.get(&scope.iri).is_some() {
                    members.insert(scope.iri.clone());
                }
                members
            }
        }
    }
}

/// Ordering for ranked hits: exact before prefix before substring, then
/// ascending distance, then IRI for a stable total order.
fn compare_hits(a: &SearchHit, b: &SearchHit) -> Ordering {
    b.exact
        .cmp(&a.exact)
        .then(b.starts_with.cmp(&a.starts_with))
        .then(b.substring.cmp(&a.substring))
        .then(a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal))
        .then_with(|| a.concept.iri.cmp(&b.concept.iri))
}

fn score_labels(
    concept: &Concept,
    query_lower: &str,
    query_folded: &str,
    opts: &SearchOptions,
) -> (bool, bool, bool, f64) {
    let labels = concept.matchable_labels(opts.include_alt_labels, opts.include_hidden_labels);
    if labels.is_empty() {
        return (false, false, false, WORST_DISTANCE);
    }

    let (mut exact, mut starts_with, mut substring) = (false, false, false);
    let mut best = WORST_DISTANCE;
    for label in labels {
        let label_lower = label.to_lowercase();
        exact |= label_lower == query_lower;
        starts_with |= label_lower.starts_with(query_lower);
        substring |= label_lower.contains(query_lower);

        let label_folded = normalize::fold(label);
        let char_distance = distance::edit_distance(query_folded, &label_folded);
        let token_distance =
            1.0 - distance::token_set_ratio(query_folded, &label_folded) / 100.0;
        best = best.min(char_distance.min(token_distance));
    }
    if exact {
        best = 0.0;
    }
    (exact, starts_with, substring, best)
}

fn score_definitions(
    concept: &Concept,
    query_lower: &str,
    query_folded: &str,
) -> (bool, bool, bool, f64) {
    if concept.definitions.is_empty() {
        return (false, false, false, WORST_DISTANCE);
    }

    let (mut exact, mut starts_with, mut substring) = (false, false, false);
    let mut best = WORST_DISTANCE;
    for definition in &concept.definitions {
        let definition_lower = definition.to_lowercase();
        exact |= definition_lower == query_lower;
        starts_with |= definition_lower.starts_with(query_lower);
        substring |= definition_lower.contains(query_lower);

        let definition_folded = normalize::fold(definition);
        let d = 1.0 - distance::partial_token_set_ratio(query_folded, &definition_folded) / 100.0;
        best = best.min(d);
    }
    if exact {
        best = 0.0;
    }
    (exact, starts_with, substring, best)
}
