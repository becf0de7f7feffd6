//! Core domain entities.
//!
//! - [`Mapping`] - A single `code -> target` pair
//! - [`MappingSet`] - The full, insertion-ordered set of mappings as stored

pub mod mapping;

pub use mapping::{Mapping, MappingSet};
