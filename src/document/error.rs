use thiserror::Error;

/// Errors raised while tokenizing a translation module.
///
/// Line numbers are 1-based.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// No line opens the exported object literal
    #[error("No object literal found (expected a line ending with '{{')")]
    MissingObject,
    /// A quoted key or value is not closed before the end of its line
    #[error("Unterminated string literal at line {line}")]
    UnterminatedString { line: usize },
    /// A `/*` comment is never closed
    #[error("Unterminated block comment starting at line {line}")]
    UnterminatedComment { line: usize },
}
