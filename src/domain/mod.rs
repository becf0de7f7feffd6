//! Domain layer containing the mapping model and storage contracts.
//!
//! This module defines what a short link *is* and what the service expects
//! from durable storage, independent of the HTTP layer or the file format.
//!
//! # Architecture
//!
//! - [`entities`] - [`entities::Mapping`] pairs and the ordered [`entities::MappingSet`] snapshot
//! - [`repositories`] - The [`repositories::MappingRepository`] load/save contract
//! - [`errors`] - Storage and code-assignment failures
//!
//! # Snapshot Discipline
//!
//! There is no shared in-memory copy of the mapping set. Every operation
//! loads a fresh [`entities::MappingSet`] from the repository, works on it,
//! and (for mutations) saves the full set back in one call.

pub mod entities;
pub mod errors;
pub mod repositories;
