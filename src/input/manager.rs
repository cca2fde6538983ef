//! Resolves a document path to its text, dispatching on file type

use crate::config::InputConfig;
use crate::error::{Result, ResumeMatcherError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Front door for résumé and job description files.
///
/// Extracted text is cached per path unless caching is switched off in the
/// `[input]` configuration table.
pub struct InputManager {
    cache: HashMap<PathBuf, String>,
    cache_enabled: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self::from_config(&InputConfig::default())
    }

    pub fn from_config(config: &InputConfig) -> Self {
        Self {
            cache: HashMap::new(),
            cache_enabled: config.cache_extracted_text,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.cache_enabled = enable;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        if let Some(text) = self.cached(path) {
            debug!("Cache hit for {}", path.display());
            return Ok(text.to_string());
        }

        let text = read_document(path).await?;

        if self.cache_enabled {
            self.cache.insert(path.to_path_buf(), text.clone());
        }

        Ok(text)
    }

    fn cached(&self, path: &Path) -> Option<&str> {
        if !self.cache_enabled {
            return None;
        }
        self.cache.get(path).map(String::as_str)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

async fn read_document(path: &Path) -> Result<String> {
    if fs::metadata(path).await.is_err() {
        return Err(ResumeMatcherError::InvalidInput(format!(
            "File does not exist: {}",
            path.display()
        )));
    }

    let file_type = FileType::from_path(path)
        .ok_or_else(|| ResumeMatcherError::InvalidInput(format!("File has no extension: {}", path.display())))?;

    info!("Reading {:?} document: {}", file_type, path.display());

    let text = match file_type {
        FileType::Pdf => PdfExtractor.extract(path).await?,
        FileType::Text => PlainTextExtractor.extract(path).await?,
        FileType::Markdown => MarkdownExtractor.extract(path).await?,
        FileType::Unknown => {
            return Err(ResumeMatcherError::UnsupportedFormat(format!(
                "Unsupported file type: {}",
                path.display()
            )))
        }
    };

    // Scanned PDFs have no text layer and come back blank.
    if text.trim().is_empty() {
        warn!("No text found in {}", path.display());
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cache_follows_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "Rust and C++").unwrap();

        let mut manager = InputManager::from_config(&InputConfig { cache_extracted_text: false });
        assert_eq!(manager.extract_text(&path).await.unwrap(), "Rust and C++");
        assert_eq!(manager.cache_size(), 0);

        let mut manager = InputManager::from_config(&InputConfig::default());
        manager.extract_text(&path).await.unwrap();
        std::fs::write(&path, "changed").unwrap();
        assert_eq!(manager.extract_text(&path).await.unwrap(), "Rust and C++");
        assert_eq!(manager.cache_size(), 1);
    }

    #[tokio::test]
    async fn test_pdf_failure_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"not a pdf at all").unwrap();

        let mut manager = InputManager::new();
        let result = manager.extract_text(&path).await;
        assert!(matches!(result, Err(ResumeMatcherError::DocumentParse(_))));
        assert_eq!(manager.cache_size(), 0);
    }
}
