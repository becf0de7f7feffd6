//! Mapping repository implementations.
//!
//! # Repositories
//!
//! - [`JsonFileMappingRepository`] - Durable JSON document with atomic replacement
//! - [`InMemoryMappingRepository`] - Volatile snapshot for tests and throwaway runs

pub mod json_file_repository;
pub mod memory_repository;

pub use json_file_repository::JsonFileMappingRepository;
pub use memory_repository::InMemoryMappingRepository;
