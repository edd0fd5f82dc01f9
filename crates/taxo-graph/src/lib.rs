//! # taxo-graph
//!
//! Taxonomy index, closure traversal, and mutation for taxograph.
//!
//! This crate provides:
//! - A one-pass index builder over an already-parsed triple source
//! - Cycle-safe, depth-bounded descendant/ancestor closure traversal
//! - Cycle detection via strongly-connected components
//! - A single-writer mutation gateway for adding concepts
//! - QA checks and structural index diffing
//! - An async loader for the remote ontology artifact
//!
//! ## Example
//!
//! ```ignore
//! use taxo_graph::{IndexConfig, TaxonomyIndex};
//!
//! let index = TaxonomyIndex::build(&source, IndexConfig::default())?;
//! let areas = index.areas_of_law(None);
//! let subtree = index.descendants(&root_iri, Some(2));
//! ```

pub mod closure;
pub mod diff;
pub mod index;
pub mod loader;
pub mod mutate;
pub mod qa;
pub mod registry;

// Re-export core types
pub use taxo_core::{Concept, Error, Result};

// Re-export graph types
pub use closure::{bounded_closure, descendants, find_cycles, Cycle};
pub use diff::{diff_indexes, DiffEntry, DiffKind};
pub use index::{IndexConfig, TaxonomyIndex};
pub use loader::OntologySource;
pub use mutate::NewConcept;
pub use qa::{audit, Finding};
pub use registry::KeyConceptRegistry;
