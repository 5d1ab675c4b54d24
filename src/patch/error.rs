use std::path::PathBuf;

use thiserror::Error;

use crate::document::ParseError;
use crate::syntax::SyntaxError;

/// Errors that stop one file from being patched.
///
/// They never stop the batch.
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Unsupported file extension: {}", path.display())]
    UnsupportedExtension { path: PathBuf },

    #[error("Failed to parse translation module: {0}")]
    Parse(#[from] ParseError),

    #[error("Patched text is not valid: {0}")]
    Syntax(#[from] SyntaxError),
}
