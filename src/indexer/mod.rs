//! Discovery of translation files.

pub mod types;
pub mod workspace;

pub use types::{
    IndexerError,
    TranslationFile,
};
pub use workspace::find_translation_files;
