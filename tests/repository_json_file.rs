use snaplink::domain::entities::MappingSet;
use snaplink::domain::errors::StoreError;
use snaplink::domain::repositories::MappingRepository;
use snaplink::infrastructure::persistence::JsonFileMappingRepository;
use tempfile::TempDir;

fn repo_in(dir: &TempDir) -> JsonFileMappingRepository {
    JsonFileMappingRepository::new(dir.path().join("urls.json"))
}

#[tokio::test]
async fn test_load_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);

    let mappings = repo.load().await.unwrap();

    assert!(mappings.is_empty());
    assert!(!repo.path().exists());
}

#[tokio::test]
async fn test_load_blank_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);

    for contents in ["", "   \n\t "] {
        std::fs::write(repo.path(), contents).unwrap();
        assert!(repo.load().await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_load_existing_document() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);
    std::fs::write(
        repo.path(),
        r#"{"c327bc": "https://www.google.com", "abc123": "https://y.com"}"#,
    )
    .unwrap();

    let mappings = repo.load().await.unwrap();

    assert_eq!(mappings.len(), 2);
    assert_eq!(mappings.get("c327bc"), Some("https://www.google.com"));
    let codes: Vec<_> = mappings.iter().map(|m| m.code.as_str()).collect();
    assert_eq!(codes, ["c327bc", "abc123"]);
}

#[tokio::test]
async fn test_load_corrupt_file_leaves_it_untouched() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);

    for contents in ["{ \"abc\": ", "[\"abc\"]", "{\"abc\": 42}", "{\"abc\": null}"] {
        std::fs::write(repo.path(), contents).unwrap();

        let result = repo.load().await;

        assert!(
            matches!(result, Err(StoreError::Corrupt(_))),
            "{contents:?} should be corrupt"
        );
        assert_eq!(std::fs::read_to_string(repo.path()).unwrap(), contents);
    }
}

#[tokio::test]
async fn test_load_invalid_utf8_is_corrupt() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);
    let contents = b"{\"abc\": \"https://example.com/\xff\"}";
    std::fs::write(repo.path(), contents).unwrap();

    let result = repo.load().await;

    assert!(matches!(result, Err(StoreError::Corrupt(_))));
    assert_eq!(std::fs::read(repo.path()).unwrap(), contents);
}

#[tokio::test]
async fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);

    let mut mappings = MappingSet::new();
    mappings.insert("zzz999", "https://z.com");
    mappings.insert("aaa111", "https://a.com/?q=1&r=2");
    repo.save(&mappings).await.unwrap();

    let loaded = repo.load().await.unwrap();
    assert_eq!(loaded, mappings);
}

#[tokio::test]
async fn test_save_writes_two_space_pretty_json() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);

    let mut mappings = MappingSet::new();
    mappings.insert("c327bc", "https://www.google.com");
    mappings.insert("abc123", "https://y.com");
    repo.save(&mappings).await.unwrap();

    let contents = std::fs::read_to_string(repo.path()).unwrap();
    assert_eq!(
        contents,
        "{\n  \"c327bc\": \"https://www.google.com\",\n  \"abc123\": \"https://y.com\"\n}"
    );
}

#[tokio::test]
async fn test_load_then_save_is_byte_stable() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);
    let original = "{\n  \"b\": \"https://b.com\",\n  \"a\": \"https://a.com\"\n}";
    std::fs::write(repo.path(), original).unwrap();

    let mappings = repo.load().await.unwrap();
    repo.save(&mappings).await.unwrap();

    assert_eq!(std::fs::read_to_string(repo.path()).unwrap(), original);
}

#[tokio::test]
async fn test_save_empty_set() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);

    repo.save(&MappingSet::new()).await.unwrap();

    assert_eq!(std::fs::read_to_string(repo.path()).unwrap(), "{}");
    assert!(repo.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let repo = JsonFileMappingRepository::new(dir.path().join("data/nested/urls.json"));

    let mut mappings = MappingSet::new();
    mappings.insert("abc123", "https://example.com");
    repo.save(&mappings).await.unwrap();

    assert_eq!(repo.load().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_save_leaves_no_temp_files() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);

    let mut mappings = MappingSet::new();
    mappings.insert("abc123", "https://example.com");
    repo.save(&mappings).await.unwrap();
    mappings.insert("def456", "https://example.org");
    repo.save(&mappings).await.unwrap();

    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, ["urls.json"]);
}

#[tokio::test]
async fn test_save_failure_is_write_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("blocker"), "not a directory").unwrap();
    let repo = JsonFileMappingRepository::new(dir.path().join("blocker/urls.json"));

    let mut mappings = MappingSet::new();
    mappings.insert("abc123", "https://example.com");
    let result = repo.save(&mappings).await;

    assert!(matches!(result, Err(StoreError::Write(_))));
}

#[tokio::test]
async fn test_failed_save_keeps_previous_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("urls.json");
    // A non-empty directory at the document path cannot be replaced by rename.
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("keep"), "x").unwrap();
    let repo = JsonFileMappingRepository::new(&path);

    let mut mappings = MappingSet::new();
    mappings.insert("abc123", "https://example.com");
    let result = repo.save(&mappings).await;

    assert!(matches!(result, Err(StoreError::Write(_))));
    assert_eq!(std::fs::read_to_string(path.join("keep")).unwrap(), "x");
    let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(leftovers, 1);
}
