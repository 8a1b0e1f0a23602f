use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::{ResumeStore, StoreError, RESUME_STORAGE_KEY};

/// Stores the record as `<dir>/resumeData.json`.
///
/// Writes go to a temp file in the same directory which is then renamed over
/// the record, so a crash mid-write never leaves a half-written record behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    path: PathBuf,
}

impl FileStore {
    /// Opens (and creates, if needed) the store directory.
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&dir).await?;
        let path = dir.join(format!("{RESUME_STORAGE_KEY}.json"));
        debug!("File store record path: {}", path.display());
        Ok(Self { dir, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ResumeStore for FileStore {
    async fn read_raw(&self) -> Result<Option<String>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(raw) => Ok(Some(raw)),
                Err(e) => {
                    warn!(
                        "Discarding resume record with invalid UTF-8 at {}: {e}",
                        self.path.display()
                    );
                    Ok(None)
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_raw(&self, raw: String) -> Result<(), StoreError> {
        let dir = self.dir.clone();
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut tmp = NamedTempFile::new_in(&dir)?;
            tmp.write_all(raw.as_bytes())?;
            tmp.as_file().sync_all()?;
            tmp.persist(&path).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(std::io::Error::other)??;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
