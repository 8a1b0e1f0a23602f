use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

const STAGED_PREFIX: &str = "resume-print-";

/// Staged print documents older than this are removed on the next open.
/// The browser has long since loaded them by then.
pub const STAGED_MAX_AGE: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Error)]
pub enum ViewportError {
    #[error("Failed to stage print document: {0}")]
    Stage(#[from] std::io::Error),

    #[error("Viewport could not be opened: {0}")]
    Blocked(String),
}

/// Somewhere a print document can be shown so the user gets a print dialog.
#[async_trait]
pub trait Viewport: Send + Sync {
    async fn open(&self, document_html: String) -> Result<(), ViewportError>;
}

/// Writes the print document to a kept file under a dedicated staging
/// directory and hands it to the platform opener (the default browser, in
/// practice). Files outlive the request because the browser reads them
/// asynchronously; stale ones are swept on each open.
#[derive(Debug, Clone)]
pub struct SystemBrowserViewport {
    staging_dir: PathBuf,
}

impl Default for SystemBrowserViewport {
    fn default() -> Self {
        Self::new(std::env::temp_dir().join("resume-studio-print"))
    }
}

impl SystemBrowserViewport {
    pub fn new(staging_dir: impl Into<PathBuf>) -> Self {
        Self {
            staging_dir: staging_dir.into(),
        }
    }

    fn stage(dir: &Path, document_html: &str) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let removed = sweep_staged(dir, STAGED_MAX_AGE, SystemTime::now());
        if removed > 0 {
            debug!("Removed {removed} stale print documents from {}", dir.display());
        }

        let mut file = tempfile::Builder::new()
            .prefix(STAGED_PREFIX)
            .suffix(".html")
            .tempfile_in(dir)?;
        file.write_all(document_html.as_bytes())?;
        let (_, path) = file.keep().map_err(|e| e.error)?;
        Ok(path)
    }
}

/// Deletes staged print documents in `dir` last modified more than `max_age`
/// before `now`. Other files are never touched. Returns how many were removed.
pub fn sweep_staged(dir: &Path, max_age: Duration, now: SystemTime) -> usize {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return 0;
    };
    let mut removed = 0;
    for entry in entries.flatten() {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !name.starts_with(STAGED_PREFIX) || !name.ends_with(".html") {
            continue;
        }
        let Ok(modified) = entry.metadata().and_then(|m| m.modified()) else {
            continue;
        };
        let age = now.duration_since(modified).unwrap_or_default();
        if age < max_age {
            continue;
        }
        match std::fs::remove_file(entry.path()) {
            Ok(()) => removed += 1,
            Err(e) => warn!("Could not remove stale print document {name}: {e}"),
        }
    }
    removed
}

#[async_trait]
impl Viewport for SystemBrowserViewport {
    async fn open(&self, document_html: String) -> Result<(), ViewportError> {
        let dir = self.staging_dir.clone();
        tokio::task::spawn_blocking(move || {
            let path = Self::stage(&dir, &document_html)?;
            debug!("Opening print document {}", path.display());
            open::that(&path).map_err(|e| ViewportError::Blocked(e.to_string()))
        })
        .await
        .map_err(|e| ViewportError::Blocked(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_writes_html_file_in_staging_dir() {
        let dir = tempfile::tempdir().unwrap();
        let staging = dir.path().join("print");

        let path = SystemBrowserViewport::stage(&staging, "<p>hi</p>").unwrap();
        assert_eq!(path.parent(), Some(staging.as_path()));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(STAGED_PREFIX) && name.ends_with(".html"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>hi</p>");
    }

    #[test]
    fn test_sweep_removes_only_stale_staged_documents() {
        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join("resume-print-old.html");
        let unrelated = dir.path().join("notes.html");
        std::fs::write(&old, "old").unwrap();
        std::fs::write(&unrelated, "keep").unwrap();

        let later = SystemTime::now() + STAGED_MAX_AGE + Duration::from_secs(1);
        assert_eq!(sweep_staged(dir.path(), STAGED_MAX_AGE, later), 1);
        assert!(!old.exists());
        assert!(unrelated.exists());
    }

    #[test]
    fn test_sweep_keeps_recent_staged_documents() {
        let dir = tempfile::tempdir().unwrap();
        let fresh = dir.path().join("resume-print-fresh.html");
        std::fs::write(&fresh, "fresh").unwrap();

        assert_eq!(sweep_staged(dir.path(), STAGED_MAX_AGE, SystemTime::now()), 0);
        assert!(fresh.exists());
    }

    #[test]
    fn test_repeated_staging_does_not_accumulate_stale_files() {
        let dir = tempfile::tempdir().unwrap();
        SystemBrowserViewport::stage(dir.path(), "first").unwrap();
        SystemBrowserViewport::stage(dir.path(), "second").unwrap();

        let later = SystemTime::now() + STAGED_MAX_AGE + Duration::from_secs(1);
        assert_eq!(sweep_staged(dir.path(), STAGED_MAX_AGE, later), 2);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
