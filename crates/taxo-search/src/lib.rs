//! # taxo-search
//!
//! Ranked fuzzy search over taxonomy labels and definitions.
//!
//! Search never mutates the index: [`FuzzySearch`] borrows a
//! `taxo_graph::TaxonomyIndex` immutably and returns [`SearchHit`] values
//! that carry match classes and a distance alongside a copy of the concept.
//!
//! ## Example
//!
//! ```ignore
//! use taxo_search::{FuzzySearch, SearchOptions};
//!
//! let search = FuzzySearch::new(&index);
//! let hits = search.search_labels("Banking", &SearchOptions::default());
//! ```

pub mod distance;
pub mod normalize;
pub mod ranker;

pub use ranker::{FuzzySearch, Scope, SearchHit, SearchOptions};
