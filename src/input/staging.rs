//! Per-request staging directory for uploaded resumes
//!
//! Uploads are written under their original file name inside a fresh
//! temporary directory. The directory and everything in it is removed when
//! the `StagingArea` is dropped.

use crate::error::{Result, ResumeRankerError};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct StagingArea {
    dir: TempDir,
}

impl StagingArea {
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new().prefix("resume-ranker-").tempdir()?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write one upload and return where it landed.
    pub async fn stage(&self, original_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let name = sanitize_file_name(original_name).ok_or_else(|| {
            ResumeRankerError::InvalidInput(format!("Invalid upload file name: {:?}", original_name))
        })?;

        let target = self.unique_path(&name);
        tokio::fs::write(&target, bytes).await?;
        Ok(target)
    }

    /// Explicit cleanup; dropping the area has the same effect.
    pub fn close(self) -> Result<()> {
        self.dir.close()?;
        Ok(())
    }

    fn unique_path(&self, name: &str) -> PathBuf {
        let candidate = self.dir.path().join(name);
        if !candidate.exists() {
            return candidate;
        }

        let path = Path::new(name);
        let stem = path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();
        let ext = path.extension().map(|e| format!(".{}", e.to_string_lossy())).unwrap_or_default();
        (2..)
            .map(|n| self.dir.path().join(format!("{} ({}){}", stem, n, ext)))
            .find(|p| !p.exists())
            .unwrap_or(candidate)
    }
}

/// Keep only the final path component of a client-supplied name.
pub fn sanitize_file_name(raw: &str) -> Option<String> {
    let last = raw.rsplit(['/', '\\']).next()?.trim();
    match last {
        "" | "." | ".." => None,
        name => Some(name.to_string()),
    }
}
