use thiserror::Error;

use crate::types::SourcePosition;

/// Defines errors that may occur while checking a translation module
#[derive(Error, Debug)]
pub enum SyntaxError {
    /// Error when failing to set the language for the parser
    #[error("Failed to set language for parser: {0}")]
    LanguageSetup(#[from] tree_sitter::LanguageError),
    /// Error when the parser returns no tree
    #[error("Failed to parse source code")]
    ParseFailed,
    /// Error when the parsed tree contains an error or missing node
    #[error("Invalid syntax at {position}: {kind}")]
    Invalid { position: SourcePosition, kind: String },
    /// Error when no exported object literal is found
    #[error("No object literal found")]
    MissingObject,
}
