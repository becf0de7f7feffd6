//! Repository trait for the durable `code -> target` mapping set.

use crate::domain::entities::MappingSet;
use crate::domain::errors::StoreError;
use async_trait::async_trait;

/// Full-snapshot persistence for the mapping set.
///
/// This is not an append log: every [`save`](Self::save) replaces the whole
/// durable state at once, and every [`load`](Self::load) returns the whole set.
/// Point lookups (`get`, reverse lookup, delete) are performed on the loaded
/// [`MappingSet`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonFileMappingRepository`] - JSON document on disk
/// - [`crate::infrastructure::persistence::InMemoryMappingRepository`] - volatile, for tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Returns the current full set of mappings.
    ///
    /// An absent or empty durable medium yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] if the stored data cannot be parsed as a
    /// mapping set, and [`StoreError::Read`] if it cannot be read at all.
    /// Never returns a partial set.
    async fn load(&self) -> Result<MappingSet, StoreError>;

    /// Atomically replaces the durable state with `mappings`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the medium cannot be written. The
    /// previously persisted state must remain intact and readable.
    async fn save(&self, mappings: &MappingSet) -> Result<(), StoreError>;
}
