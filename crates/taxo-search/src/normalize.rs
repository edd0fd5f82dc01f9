//! Query and field text normalization.
//!
//! Distance metrics compare stopword-reduced, case-folded text so that
//! connective words do not dominate short labels. Match-class tests (exact,
//! prefix, substring) deliberately use the unnormalized text instead; only
//! the numeric distance sees the reduced form.

use std::collections::{BTreeSet, HashSet};

use once_cell::sync::Lazy;

/// Tokens removed before distance computation: articles, conjunctions,
/// common prepositions, and the literal token "law" (present in nearly every
/// label of the domain, so it carries no signal).
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // articles
        "a", "an", "the",
        // conjunctions
        "and", "or", "nor", "but",
        // prepositions
        "at", "by", "for", "from", "in", "of", "on", "to", "with",
        // domain filler
        "law",
    ]
    .into_iter()
    .collect()
});

/// Case-fold and strip stopwords, collapsing whitespace.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .filter(|token| !STOPWORDS.contains(token))
        .collect::<Vec<&str>>()
        .join(" ")
}

/// The unordered token set of the folded text.
pub fn tokens(text: &str) -> BTreeSet<String> {
    fold(text).split_whitespace().map(str::to_string).collect()
}
