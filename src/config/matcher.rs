//! File pattern matcher for translation files.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};

use super::PatchSettings;

#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("Invalid include pattern '{pattern}': {source}")]
    InvalidIncludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

/// Matches files of the translations directory against the configured
/// extension and `excludePatterns`.
///
/// The base language file is always excluded.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    translations_dir: PathBuf,
    include_set: GlobSet,
    exclude_set: GlobSet,
}

impl FileMatcher {
    /// Creates a new matcher from settings.
    pub fn new(settings: &PatchSettings) -> Result<Self, MatcherError> {
        let include_patterns = vec![format!("*.{}", settings.file_extension)];
        let include_set = Self::build_glob_set(&include_patterns, |pattern, source| {
            MatcherError::InvalidIncludePattern { pattern, source }
        })?;

        let mut exclude_patterns = settings.exclude_patterns.clone();
        exclude_patterns.push(format!("{}.{}", settings.base_language, settings.file_extension));
        let exclude_set = Self::build_glob_set(&exclude_patterns, |pattern, source| {
            MatcherError::InvalidExcludePattern { pattern, source }
        })?;

        Ok(Self { translations_dir: settings.translations_dir.clone(), include_set, exclude_set })
    }

    /// 各パターンを `GlobSet` にまとめる
    fn build_glob_set<F>(patterns: &[String], make_error: F) -> Result<GlobSet, MatcherError>
    where
        F: Fn(String, globset::Error) -> MatcherError,
    {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| make_error(pattern.clone(), e))?;
            builder.add(glob);
        }
        Ok(builder.build()?)
    }

    #[must_use]
    pub fn translations_dir(&self) -> &Path {
        &self.translations_dir
    }

    /// Returns true if the path has the translation extension and matches
    /// no exclude pattern.
    ///
    /// The path must be absolute and under the translations directory.
    #[must_use]
    pub fn is_translation_file(&self, absolute_path: &Path) -> bool {
        let Some(relative_path) = absolute_path.strip_prefix(&self.translations_dir).ok() else {
            return false;
        };

        self.is_translation_file_relative(relative_path)
    }

    /// Returns true if the path has the translation extension and matches
    /// no exclude pattern.
    ///
    /// The path must be relative to the translations directory.
    #[must_use]
    pub fn is_translation_file_relative(&self, relative_path: &Path) -> bool {
        self.include_set.is_match(relative_path) && !self.exclude_set.is_match(relative_path)
    }
}
