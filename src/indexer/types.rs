//! Indexer type definitions.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::MatcherError;

/// A translation file found in the translations directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationFile {
    pub language: String,
    pub path: PathBuf,
}

#[derive(Error, Debug)]
pub enum IndexerError {
    /// Error when the translations directory does not exist
    #[error("Translations directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),
    /// Error when building the file matcher
    #[error(transparent)]
    Matcher(#[from] MatcherError),
}
