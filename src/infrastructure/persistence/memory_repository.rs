//! Volatile in-memory implementation of the mapping repository.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::MappingSet;
use crate::domain::errors::StoreError;
use crate::domain::repositories::MappingRepository;

/// Repository keeping the last saved snapshot in memory.
///
/// Honors the same full-snapshot contract as the file repository but loses
/// everything on restart. Used by tests and by `STORAGE=memory`.
#[derive(Default)]
pub struct InMemoryMappingRepository {
    snapshot: RwLock<MappingSet>,
}

impl InMemoryMappingRepository {
    pub fn new() -> Self {
        debug!("Using in-memory mapping store (not persisted)");
        Self::default()
    }

    /// Creates a repository pre-populated with `mappings`.
    pub fn with_mappings(mappings: MappingSet) -> Self {
        Self {
            snapshot: RwLock::new(mappings),
        }
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn load(&self) -> Result<MappingSet, StoreError> {
        Ok(self.snapshot.read().await.clone())
    }

    async fn save(&self, mappings: &MappingSet) -> Result<(), StoreError> {
        *self.snapshot.write().await = mappings.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_returns_last_saved_snapshot() {
        let repo = InMemoryMappingRepository::new();
        assert!(repo.load().await.unwrap().is_empty());

        let mut set = MappingSet::new();
        set.insert("abc123", "https://example.com");
        repo.save(&set).await.unwrap();

        // Mutating the caller's copy must not leak into the store.
        set.insert("zzz999", "https://other.com");

        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get("abc123"), Some("https://example.com"));
    }
}
