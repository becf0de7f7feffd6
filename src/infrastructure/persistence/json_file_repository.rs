//! JSON document implementation of the mapping repository.

use async_trait::async_trait;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error};

use crate::domain::entities::MappingSet;
use crate::domain::errors::StoreError;
use crate::domain::repositories::MappingRepository;

/// Repository persisting the mapping set as a single JSON object on disk.
///
/// The document maps short codes to target URLs and is pretty-printed with
/// two-space indentation:
///
/// ```json
/// {
///   "c327bc": "https://www.google.com"
/// }
/// ```
///
/// Saves write a sibling temporary file, fsync it, and rename it over the
/// document, so readers only ever see the old or the new snapshot.
pub struct JsonFileMappingRepository {
    path: PathBuf,
}

impl JsonFileMappingRepository {
    /// Creates a repository for the document at `path`.
    ///
    /// The file does not need to exist; it is created on the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(format!(".{}.tmp", std::process::id()));
        PathBuf::from(name)
    }

    async fn write_atomically(&self, data: &[u8]) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let temp_path = self.temp_path();
        let result = async {
            let mut file = fs::File::create(&temp_path).await?;
            file.write_all(data).await?;
            file.sync_all().await?;
            fs::rename(&temp_path, &self.path).await
        }
        .await;

        if result.is_err() {
            let _ = fs::remove_file(&temp_path).await;
        }

        result
    }
}

#[async_trait]
impl MappingRepository for JsonFileMappingRepository {
    async fn load(&self) -> Result<MappingSet, StoreError> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Mapping file not found, starting empty");
                return Ok(MappingSet::new());
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                error!(path = %self.path.display(), error = %e, "Mapping file is not valid UTF-8");
                return Err(StoreError::Corrupt(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )));
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Failed to read mapping file");
                return Err(StoreError::Read(format!("{}: {}", self.path.display(), e)));
            }
        };

        if data.trim().is_empty() {
            return Ok(MappingSet::new());
        }

        serde_json::from_str(&data).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "Mapping file is corrupt");
            StoreError::Corrupt(format!("{}: {}", self.path.display(), e))
        })
    }

    async fn save(&self, mappings: &MappingSet) -> Result<(), StoreError> {
        let data =
            serde_json::to_vec_pretty(mappings).map_err(|e| StoreError::Write(e.to_string()))?;

        self.write_atomically(&data).await.map_err(|e| {
            error!(path = %self.path.display(), error = %e, "Failed to write mapping file");
            StoreError::Write(format!("{}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), count = mappings.len(), "Mapping file saved");
        Ok(())
    }
}
