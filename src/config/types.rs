use std::collections::{
    BTreeMap,
    HashSet,
};
use std::path::{
    Path,
    PathBuf,
};

use image::ImageFormat;
use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::locale::is_language_code;
use crate::syntax::ScriptLanguage;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "block.entries[0].key")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// 番号付きリストとして整形
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Settings of a patch run, read from `.i18n-patch.json`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatchSettings {
    /// Directory holding one `<language>.<extension>` file per language.
    pub translations_dir: PathBuf,
    pub file_extension: String,
    /// Language whose file is the source of the block defaults.
    /// Its file is never patched.
    pub base_language: String,
    /// Glob patterns, relative to `translations_dir`, of files to leave alone.
    pub exclude_patterns: Vec<String>,

    pub block: BlockSettings,

    /// Localized block values: language code → key → value.
    ///
    /// Keys not in the block definition are upserted too, after the block keys.
    pub translations: BTreeMap<String, BTreeMap<String, String>>,

    pub images: ImageSettings,
}

/// Definition of the marked block of entries.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockSettings {
    /// Comment line that opens the block.
    pub marker: String,
    /// Indent of the entries written by the installer.
    pub indent: String,
    /// Block keys in order, with their base-language values.
    pub entries: Vec<BlockEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BlockEntry {
    pub key: String,
    pub value: String,
}

impl BlockEntry {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageSettings {
    /// Image files that must be in `format`.
    pub files: Vec<PathBuf>,
    /// Canonical format, by file extension (e.g. `"png"`).
    pub format: String,
}

impl Default for PatchSettings {
    fn default() -> Self {
        Self {
            translations_dir: PathBuf::from("constants/translations"),
            file_extension: "ts".to_string(),
            base_language: "en".to_string(),
            exclude_patterns: Vec::new(),
            block: BlockSettings::default(),
            translations: BTreeMap::new(),
            images: ImageSettings::default(),
        }
    }
}

impl Default for BlockSettings {
    fn default() -> Self {
        Self {
            marker: "// Premium Benefits".to_string(),
            indent: "  ".to_string(),
            entries: Vec::new(),
        }
    }
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self { files: Vec::new(), format: "png".to_string() }
    }
}

impl BlockSettings {
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys().any(|k| k == key)
    }
}

impl ImageSettings {
    #[must_use]
    pub fn image_format(&self) -> Option<ImageFormat> {
        ImageFormat::from_extension(&self.format)
    }
}

impl PatchSettings {
    /// Path of the translation file for `language`.
    #[must_use]
    pub fn translation_path(&self, language: &str) -> PathBuf {
        self.translations_dir.join(format!("{language}.{}", self.file_extension))
    }

    #[must_use]
    pub fn script_language(&self) -> Option<ScriptLanguage> {
        ScriptLanguage::from_extension(&self.file_extension)
    }

    /// Resolves relative paths against `base`, the directory of the
    /// configuration file.
    pub fn resolve_paths(&mut self, base: &Path) {
        if self.translations_dir.is_relative() {
            self.translations_dir = base.join(&self.translations_dir);
        }
        for file in &mut self.images.files {
            if file.is_relative() {
                *file = base.join(&*file);
            }
        }
    }

    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    /// - Unknown language, extension or image format
    /// - Invalid or duplicate block key
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.file_extension.is_empty() {
            errors.push(ValidationError::new(
                "fileExtension",
                "The extension cannot be empty. Example: \"ts\"",
            ));
        } else if self.script_language().is_none() {
            errors.push(ValidationError::new(
                "fileExtension",
                format!(
                    "Unsupported extension '{}'. Use one of: ts, tsx, mts, cts, js, jsx, mjs, cjs",
                    self.file_extension
                ),
            ));
        }

        if !is_language_code(&self.base_language) {
            errors.push(ValidationError::new(
                "baseLanguage",
                format!("'{}' is not a language code. Example: \"en\"", self.base_language),
            ));
        }

        for (index, pattern) in self.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        self.block.validate_into(&mut errors);

        for language in self.translations.keys() {
            if language == &self.base_language {
                errors.push(ValidationError::new(
                    format!("translations.{language}"),
                    "The base language file is never patched. Put its values in 'block.entries'",
                ));
            } else if !is_language_code(language) {
                errors.push(ValidationError::new(
                    format!("translations.{language}"),
                    format!("'{language}' is not a language code"),
                ));
            }
        }

        match self.images.image_format() {
            Some(format) if format.writing_enabled() => {}
            _ => errors.push(ValidationError::new(
                "images.format",
                format!("Unsupported image format '{}'. Example: \"png\"", self.images.format),
            )),
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl BlockSettings {
    /// ブロック定義の検証結果を `errors` に追加
    fn validate_into(&self, errors: &mut Vec<ValidationError>) {
        let marker = self.marker.trim();
        if marker.is_empty() {
            errors.push(ValidationError::new(
                "block.marker",
                "The marker cannot be empty. Example: \"// Premium Benefits\"",
            ));
        } else if !marker.starts_with("//") {
            errors.push(ValidationError::new(
                "block.marker",
                format!("The marker must be a line comment starting with '//', got '{marker}'"),
            ));
        }

        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            errors.push(ValidationError::new(
                "block.indent",
                "The indent may only contain spaces and tabs",
            ));
        }

        if self.entries.is_empty() {
            errors.push(ValidationError::new(
                "block.entries",
                "At least one entry is required. Example: [{\"key\": \"premium_benefit_ads\", \"value\": \"Ad-free experience\"}]",
            ));
        }

        let mut seen = HashSet::new();
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.key.is_empty() || entry.key.chars().any(char::is_control) {
                errors.push(ValidationError::new(
                    format!("block.entries[{index}].key"),
                    "The key cannot be empty or contain control characters",
                ));
            } else if !seen.insert(entry.key.as_str()) {
                errors.push(ValidationError::new(
                    format!("block.entries[{index}].key"),
                    format!("Duplicate key '{}'", entry.key),
                ));
            }
        }
    }
}
