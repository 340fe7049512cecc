//! Input manager: folder scanning and format-routed extraction

use crate::error::{Result, ResumeRankerError};
use crate::input::file_detector::SupportedFormat;
use crate::input::text_extractor::{DocxExtractor, PdfExtractor, TextExtractor};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// A resume on disk with a recognised format
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub path: PathBuf,
    pub format: SupportedFormat,
    pub name: String,
}

impl Document {
    /// `None` when the extension is not one of the supported formats.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let format = SupportedFormat::from_path(&path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Some(Self { path, format, name })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    pub async fn extract_text(&self, document: &Document) -> Result<String> {
        if !document.path.exists() {
            return Err(ResumeRankerError::InvalidInput(format!(
                "File does not exist: {}",
                document.path.display()
            )));
        }

        match document.format {
            SupportedFormat::Pdf => {
                info!("Extracting text from PDF: {}", document.path.display());
                PdfExtractor.extract(&document.path).await
            }
            SupportedFormat::Docx => {
                info!("Extracting text from DOCX: {}", document.path.display());
                DocxExtractor.extract(&document.path).await
            }
        }
    }

    /// List resume files directly inside `folder`, sorted by file name.
    pub async fn scan_folder(&self, folder: &Path) -> Result<Vec<PathBuf>> {
        if !folder.is_dir() {
            return Err(ResumeRankerError::InvalidInput(format!(
                "Resume folder is not a directory: {}",
                folder.display()
            )));
        }

        let mut entries = tokio::fs::read_dir(folder).await?;
        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if !entry.file_type().await?.is_file() {
                continue;
            }
            if SupportedFormat::from_path(&path).is_some() {
                paths.push(path);
            } else {
                debug!("Ignoring non-resume file: {}", path.display());
            }
        }

        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(paths)
    }

    pub async fn read_job_description(&self, path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path).await.map_err(|e| {
            ResumeRankerError::InvalidInput(format!("Cannot read job description '{}': {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_from_path() {
        let doc = Document::from_path("/tmp/resumes/Jane Doe.PDF").unwrap();
        assert_eq!(doc.format, SupportedFormat::Pdf);
        assert_eq!(doc.name, "Jane Doe.PDF");

        assert!(Document::from_path("/tmp/resumes/notes.txt").is_none());
    }

    #[tokio::test]
    async fn test_scan_folder_is_flat_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.docx", "a.pdf", "c.txt", "d.doc"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.pdf")).unwrap();
        std::fs::write(dir.path().join("nested.pdf").join("inner.pdf"), b"x").unwrap();

        let paths = InputManager::new().scan_folder(dir.path()).await.unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["a.pdf", "b.docx"]);
    }

    #[tokio::test]
    async fn test_scan_missing_folder() {
        let result = InputManager::new().scan_folder(Path::new("/no/such/folder")).await;
        assert!(matches!(result, Err(ResumeRankerError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_extract_missing_file() {
        let doc = Document::from_path("/no/such/resume.docx").unwrap();
        let result = InputManager::new().extract_text(&doc).await;
        assert!(matches!(result, Err(ResumeRankerError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_read_job_description() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.txt");
        std::fs::write(&path, "Python developer wanted").unwrap();

        let manager = InputManager::new();
        assert_eq!(manager.read_job_description(&path).await.unwrap(), "Python developer wanted");
        assert!(manager.read_job_description(&dir.path().join("none.txt")).await.is_err());
    }
}
