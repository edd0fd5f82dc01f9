//! # taxo-core
//!
//! Core types, traits, and abstractions for the taxograph library.
//!
//! This crate provides the foundational data structures and trait definitions
//! that the other taxograph crates depend on: the [`Concept`] record, the
//! [`TripleSource`] contract for already-parsed ontologies, the shared error
//! taxonomy, and default constants.

pub mod concept;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod triples;

// Re-export commonly used types at crate root
pub use concept::Concept;
pub use error::{Error, Result};
pub use triples::{vocab, MemoryTripleSource, TripleSource};
