#![allow(dead_code)]

use snaplink::application::services::LinkService;
use snaplink::domain::entities::{Mapping, MappingSet};
use snaplink::domain::repositories::MappingRepository;
use snaplink::infrastructure::persistence::{InMemoryMappingRepository, JsonFileMappingRepository};
use snaplink::state::AppState;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

pub fn create_test_state(repository: Arc<dyn MappingRepository>) -> AppState {
    let link_service = Arc::new(LinkService::new(repository));
    AppState::new(link_service, None)
}

/// State over an in-memory store seeded with `pairs`, in order.
pub fn create_seeded_state(pairs: &[(&str, &str)]) -> AppState {
    let mappings: MappingSet = pairs
        .iter()
        .map(|(code, target)| Mapping::new(*code, *target))
        .collect();

    create_test_state(Arc::new(InMemoryMappingRepository::with_mappings(mappings)))
}

/// State over a JSON file inside `dir`. Returns the file path as well.
pub fn create_file_state(dir: &TempDir) -> (AppState, PathBuf) {
    let path = dir.path().join("urls.json");
    let state = create_test_state(Arc::new(JsonFileMappingRepository::new(&path)));
    (state, path)
}

pub fn write_mapping_file(path: &Path, contents: &str) {
    std::fs::write(path, contents).unwrap();
}
